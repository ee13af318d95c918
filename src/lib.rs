//! Inkpost - Blogging Backend Library
//!
//! A small blogging server: users register and log in with a username and
//! password, receive a signed session cookie, and publish posts with a cover
//! image.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and configuration
//!   - `Post`, `PopulatedPost`, `NewPost`
//!   - `AppConfig` and its builder
//!
//! - **`backend`** - Axum HTTP server
//!   - Credential store and session tokens
//!   - Post repository and cover image uploads
//!   - Routes, error responses and middleware
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpost::backend::server::create_app;
//! use inkpost::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:4000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
