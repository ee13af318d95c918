/**
 * Auth Routes
 *
 * # Routes
 *
 * - `POST /register` - User registration
 * - `POST /login` - User login
 * - `GET /profile` - Current session claims (requires the `token` cookie)
 * - `POST /logout` - Clear the session cookie
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, logout, profile, register};
use crate::backend::server::state::AppState;

/// Configure authentication routes
///
/// `/profile` is the only route here that checks the cookie; it does so
/// through the `SessionUser` extractor.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/profile", get(profile))
        .route("/logout", post(logout))
}
