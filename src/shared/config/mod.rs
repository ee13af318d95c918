//! Application configuration module
//!
//! Provides the configuration consumed at process start. Values come from the
//! environment (`AppConfig::from_env`) or are assembled directly through
//! `AppConfigBuilder`, which is how tests wire up a server.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET` - session token signing secret (required)
//! - `DATABASE_URL` - sqlx connection string (default: `sqlite://inkpost.db`)
//! - `PORT` - listen port (default: 4000)
//! - `UPLOAD_DIR` - upload storage directory (default: `uploads`)
//! - `CORS_ORIGIN` - allowed browser origin (default: `http://localhost:3000`)
//! - `BCRYPT_COST` - password hashing work factor (default: 10)
//! - `MAX_UPLOAD_BYTES` - body limit for post submissions (default: 10 MiB)

use axum::http::HeaderValue;
use std::path::PathBuf;
use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 4000;

/// Default database connection string
pub const DEFAULT_DATABASE_URL: &str = "sqlite://inkpost.db";

/// Default upload directory, relative to the working directory
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Default browser origin allowed to send credentialed requests
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Lowest bcrypt work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest bcrypt work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Default request body limit for post submissions
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Database connection string
    pub database_url: String,
    /// Secret used to sign session tokens
    pub jwt_secret: String,
    /// Listen port
    pub port: u16,
    /// Directory receiving uploaded files
    pub upload_dir: PathBuf,
    /// Allowed CORS origin, already checked to be a valid header value
    pub cors_origin: HeaderValue,
    /// bcrypt cost
    pub bcrypt_cost: u32,
    /// Maximum accepted body size for `POST /post`
    pub max_upload_bytes: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("port", &self.port)
            .field("upload_dir", &self.upload_dir)
            .field("cors_origin", &self.cors_origin)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Ok(port) = std::env::var("PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("PORT", port))?;
            builder = builder.port(port);
        }
        if let Ok(dir) = std::env::var("UPLOAD_DIR") {
            builder = builder.upload_dir(dir);
        }
        if let Ok(origin) = std::env::var("CORS_ORIGIN") {
            builder = builder.cors_origin(origin);
        }
        if let Ok(cost) = std::env::var("BCRYPT_COST") {
            let cost = cost
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue("BCRYPT_COST", cost))?;
            builder = builder.bcrypt_cost(cost);
        }
        if let Ok(limit) = std::env::var("MAX_UPLOAD_BYTES") {
            let limit = limit
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue("MAX_UPLOAD_BYTES", limit))?;
            builder = builder.max_upload_bytes(limit);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.database_url.is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue(
                "BCRYPT_COST",
                self.bcrypt_cost.to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    port: Option<u16>,
    upload_dir: Option<PathBuf>,
    cors_origin: Option<String>,
    bcrypt_cost: Option<u32>,
    max_upload_bytes: Option<usize>,
}

impl AppConfigBuilder {
    /// Set the database connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the upload directory
    pub fn upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_dir = Some(dir.into());
        self
    }

    /// Set the allowed CORS origin
    pub fn cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = Some(origin.into());
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the upload body limit
    pub fn max_upload_bytes(mut self, limit: usize) -> Self {
        self.max_upload_bytes = Some(limit);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let origin = self
            .cors_origin
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = HeaderValue::from_str(&origin)
            .map_err(|_| ConfigError::InvalidValue("CORS_ORIGIN", origin))?;

        let config = AppConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            port: self.port.unwrap_or(DEFAULT_PORT),
            upload_dir: self
                .upload_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            cors_origin,
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            max_upload_bytes: self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
