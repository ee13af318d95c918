/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the server. Each component
 * reports failures through its own enum, and all of them fold into
 * `BackendError`, which knows how to become an HTTP response.
 *
 * # Error Categories
 *
 * ## Validation Errors
 *
 * Bad input shape: duplicate or too-short usernames, missing fields.
 *
 * ## Auth Errors
 *
 * Credential mismatches and invalid, forged or missing session tokens.
 *
 * ## Upload Errors
 *
 * Filesystem failures while storing or renaming an uploaded file.
 *
 * ## Not Found
 *
 * Lookups for posts that do not exist.
 */

use std::path::PathBuf;

use axum::http::StatusCode;
use thiserror::Error;

/// Input validation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A user with this username is already registered
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    /// A field is shorter than its minimum length
    #[error("{field} must be at least {min} characters")]
    TooShort {
        /// The offending field
        field: &'static str,
        /// Minimum accepted length, in characters
        min: usize,
    },

    /// A required field is absent or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Authentication failures
///
/// A missing token, an empty token and a forged token all surface as
/// `InvalidToken`; whether absence means "anonymous" is the caller's call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Token is malformed, empty, absent or carries a bad signature
    #[error("Invalid token")]
    InvalidToken,

    /// No user with the given username
    #[error("User not found")]
    NotFound,

    /// Password does not match the stored hash
    #[error("wrong credentials")]
    WrongCredentials,

    /// The token could not be produced
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Filesystem failures on the upload path
#[derive(Debug, Error)]
pub enum UploadError {
    /// The uploaded bytes could not be written to temporary storage
    #[error("Failed to store upload at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temporary file could not be moved to its final path
    #[error("Failed to rename {from} to {to}: {source}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant can be converted to an HTTP response.
///
/// # Usage
///
/// ```rust
/// use inkpost::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::not_found("post");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., malformed multipart body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Requested resource does not exist
    #[error("{what} not found")]
    NotFound {
        /// Kind of resource that was looked up
        what: &'static str,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(what: &'static str) -> Self {
        Self::NotFound { what }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Validation` - 400 Bad Request
    /// - `Auth` - 400 Bad Request, except signing failures (500)
    /// - `NotFound` - 404 Not Found
    /// - `Upload`, `Database`, `PasswordHash` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Auth(AuthError::Signing(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upload(_) | Self::Database(_) | Self::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    ///
    /// Server faults get a generic message so storage details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Validation(err) => err.to_string(),
            Self::Auth(AuthError::Signing(_)) => "Internal server error".to_string(),
            Self::Auth(err) => err.to_string(),
            Self::NotFound { .. } => self.to_string(),
            Self::Upload(_) | Self::Database(_) | Self::PasswordHash(_) => {
                "Internal server error".to_string()
            }
        }
    }
}
