/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - CORS for the configured frontend origin, with credentials so the
 *   session cookie travels on cross-origin requests
 * - Request tracing
 *
 * Stored cover images are served as static files under `/uploads`.
 */

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::post_routes::configure_post_routes;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// CORS policy for the configured frontend origin
///
/// Credentialed CORS forbids wildcards, so methods and headers are listed
/// explicitly.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::exact(config.cors_origin.clone()))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state with the stores, codec and configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// ## Auth Routes
///
/// - `POST /register` - User registration
/// - `POST /login` - User login, sets the `token` cookie
/// - `GET /profile` - Claims of the current session
/// - `POST /logout` - Clears the `token` cookie
///
/// ## Post Routes
///
/// - `POST /post` - Create a post (multipart, requires cookie)
/// - `GET /post` - Most recent posts
/// - `GET /post/{id}` - One post
///
/// ## Static Files
///
/// `/uploads/*` is served from the configured upload directory.
pub fn create_router(app_state: AppState) -> Router<()> {
    let config = app_state.config.clone();

    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router);
    let router = configure_post_routes(router, config.max_upload_bytes);

    // Add static file serving
    let router = router.nest_service("/uploads", ServeDir::new(&config.upload_dir));

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .with_state(app_state)
}
