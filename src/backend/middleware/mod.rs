//! Middleware Module
//!
//! Request processing shared by several handlers.
//!
//! - **`auth`** - Session cookie lookup and the `SessionUser` extractor

pub mod auth;

pub use auth::{cleared_session_cookie, session_cookie, session_token, SessionUser, TOKEN_COOKIE};
