/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Sign a session token
 * 4. Set the token cookie and return the user info
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - The cookie is sent with `SameSite=None; Secure` so cross-site frontends keep it
 * - User passwords are never returned in responses
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};
use std::sync::Arc;

use crate::backend::auth::handlers::types::{LoginRequest, UserResponse};
use crate::backend::auth::sessions::SessionCodec;
use crate::backend::auth::users::CredentialStore;
use crate::backend::error::BackendError;
use crate::backend::middleware::session_cookie;

/// Login handler
///
/// # Arguments
///
/// * `State(users)` - Credential store
/// * `State(sessions)` - Session token codec
/// * `Json(request)` - Login request containing username and password
///
/// # Returns
///
/// JSON body with the user's id and username, plus a `Set-Cookie` header
/// carrying the session token.
///
/// # Errors
///
/// * `400 Bad Request` - Unknown username ("User not found"), wrong password
///   ("wrong credentials") or a malformed body
/// * `500 Internal Server Error` - If the database query or signing fails
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "secret1"
/// }
/// ```
pub async fn login(
    State(users): State<CredentialStore>,
    State(sessions): State<Arc<SessionCodec>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Login attempt for username: {}", request.username);

    let identity = users
        .authenticate(&request.username, &request.password)
        .await
        .inspect_err(|e| tracing::warn!("Login failed for {}: {}", request.username, e))?;

    let token = sessions.issue(&identity)?;
    let cookie = session_cookie(token);

    tracing::info!("User logged in: {}", identity.username);
    Ok((
        AppendHeaders([(SET_COOKIE, cookie.to_string())]),
        Json(UserResponse::from(identity)),
    ))
}
