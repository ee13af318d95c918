//! Authentication Module
//!
//! This module handles user registration, login, and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model, credential store and queries
//! ├── sessions.rs     - Session token signing and verification
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username and password → user stored with a bcrypt hash
//! 2. **Login**: credentials verified → signed token set as the `token` cookie
//! 3. **Profile**: cookie verified → claims returned
//! 4. **Logout**: cookie overwritten with an empty value
//!
//! Tokens carry no expiry. A token stays valid for as long as the signing
//! secret is unchanged.

/// User data model and database operations
pub mod users;

/// Session token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{login, logout, profile, register};
pub use sessions::{Claims, Identity, SessionCodec};
pub use users::{CredentialStore, User};
