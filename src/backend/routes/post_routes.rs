/**
 * Post Routes
 *
 * - `POST /post` - Create a post from a multipart form
 * - `GET /post` - Up to 20 most recent posts
 * - `GET /post/{id}` - One post
 */

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::backend::posts::{create_post, get_post, list_posts};
use crate::backend::server::state::AppState;

/// Configure post routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `max_upload_bytes` - Body limit applied to post submissions
pub fn configure_post_routes(
    router: Router<AppState>,
    max_upload_bytes: usize,
) -> Router<AppState> {
    router
        .route(
            "/post",
            get(list_posts).post(create_post).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/post/{id}", get(get_post))
}
