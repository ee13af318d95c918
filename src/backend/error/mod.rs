//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `ValidationError` - Duplicate or too-short usernames, missing fields
//! - `AuthError` - Credential mismatches and invalid session tokens
//! - `UploadError` - Filesystem failures while storing a cover image
//! - `BackendError` - Umbrella type returned by handlers
//!
//! No operation is retried; each failure is reported once, as JSON.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, BackendError, UploadError, ValidationError};
