/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate username length (at least 4 characters)
 * 2. Check that the username is free
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Return the user record, without its hash
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};

use crate::backend::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::backend::auth::users::CredentialStore;
use crate::backend::error::BackendError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If the username is too short or already taken, or the
///   body is not a JSON object with `username` and `password`
/// * `500 Internal Server Error` - If password hashing or the insert fails
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "secret1"
/// }
/// ```
pub async fn register(
    State(users): State<CredentialStore>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Register request for username: {}", request.username);

    let user = users
        .register(&request.username, &request.password)
        .await
        .inspect_err(|e| tracing::warn!("Registration failed for {}: {}", request.username, e))?;

    tracing::info!("User created successfully: {}", user.username);
    Ok(Json(user.into()))
}
