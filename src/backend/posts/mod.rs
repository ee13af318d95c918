//! Posts Module
//!
//! Blog posts with a cover image.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs        - Module exports
//! ├── db.rs         - Post repository (SQLite)
//! ├── upload.rs     - Cover image storage and filename normalization
//! └── handlers.rs   - HTTP handlers for /post
//! ```

/// Post storage
pub mod db;

/// Cover image uploads
pub mod upload;

/// HTTP handlers
pub mod handlers;

pub use db::{PostRepository, DEFAULT_LIST_LIMIT};
pub use handlers::{create_post, get_post, list_posts};
