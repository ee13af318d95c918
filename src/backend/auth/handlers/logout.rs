/**
 * Logout Handler
 *
 * POST /logout overwrites the session cookie with an empty value. Tokens are
 * stateless, so a copy of the old token stays valid wherever it was kept.
 */
use axum::{
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::backend::middleware::cleared_session_cookie;

/// Clear the session cookie and reply `"ok"`
pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, cleared_session_cookie().to_string())]),
        Json("ok"),
    )
}
