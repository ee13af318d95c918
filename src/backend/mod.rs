//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server backed by
//! SQLite, with cookie-based sessions and cover image uploads.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database bootstrap
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, session tokens, auth handlers
//! - **`posts`** - Post repository, uploads, post handlers
//! - **`middleware`** - Session cookie extraction
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── posts/          - Posts and uploads
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Thread Safety
//!
//! No state is mutated in process after startup. The signing secret and the
//! configuration are shared read-only; the sqlx pool is safe to share across
//! handlers.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Posts and cover image uploads
pub mod posts;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
