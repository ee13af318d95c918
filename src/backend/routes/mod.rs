//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, CORS and tracing layers
//! ├── api_routes.rs   - Authentication routes
//! └── post_routes.rs  - Post routes
//! ```

/// Main router creation
pub mod router;

/// Authentication routes
pub mod api_routes;

/// Post routes
pub mod post_routes;

// Re-export commonly used functions
pub use router::create_router;
