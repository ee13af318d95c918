/**
 * Profile Handler
 *
 * GET /profile echoes the verified claims of the session cookie.
 */
use axum::response::Json;

use crate::backend::auth::sessions::Claims;
use crate::backend::middleware::SessionUser;

/// Return the caller's session claims
///
/// The `SessionUser` extractor rejects with `400 Invalid token` when the
/// cookie is missing or does not verify.
///
/// # Example Response
///
/// ```json
/// { "username": "alice", "id": "6f1c…", "iat": 1700000000 }
/// ```
pub async fn profile(SessionUser(claims): SessionUser) -> Json<Claims> {
    tracing::debug!("Profile requested by {}", claims.username);
    Json(claims)
}
