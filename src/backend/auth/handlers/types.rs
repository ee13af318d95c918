/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::sessions::Identity;
use crate::backend::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's chosen username (at least 4 chars)
    pub username: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

/// User response (without sensitive data)
///
/// Returned by register and login. Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
        }
    }
}

impl From<Identity> for UserResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.user_id.to_string(),
            username: identity.username,
        }
    }
}
