//! Server Module
//!
//! This module contains the code that initializes and configures the Axum
//! HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database connection and migrations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig` is read by the binary and passed in
//! 2. **Database**: The SQLite pool is opened and migrated
//! 3. **State Creation**: Stores and the session codec are built from configuration
//! 4. **Router Creation**: Routes, CORS, tracing and static files are configured

/// Application state management
pub mod state;

/// Database bootstrap
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::{build_state, create_app};
