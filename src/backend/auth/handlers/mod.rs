//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Request and response types
//! ├── register.rs   - User registration handler
//! ├── login.rs      - User authentication handler
//! ├── profile.rs    - Current session handler
//! └── logout.rs     - Cookie clearing handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register
//! - **`login`** - POST /login (sets the `token` cookie)
//! - **`profile`** - GET /profile
//! - **`logout`** - POST /logout

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Profile handler
pub mod profile;

/// Logout handler
pub mod logout;

// Re-export commonly used types
pub use types::{LoginRequest, RegisterRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use profile::profile;
pub use register::register;
