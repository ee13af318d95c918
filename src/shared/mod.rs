//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and its clients. These types define the JSON shapes exchanged
//! over the HTTP API, plus the configuration every component is built from.

/// Post wire types
pub mod post;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use post::{AuthorSummary, NewPost, PopulatedPost, Post};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
