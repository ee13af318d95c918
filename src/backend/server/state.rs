/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * Nothing in the state is mutated after startup. The signing keys and the
 * configuration sit behind `Arc`; the stores hold a cloneable sqlx pool,
 * which is safe to share between concurrent requests.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::sessions::SessionCodec;
use crate::backend::auth::users::CredentialStore;
use crate::backend::posts::db::PostRepository;
use crate::shared::AppConfig;

/// Application state shared by every handler
///
/// # Fields
///
/// * `users` - Credential store (user registration and login)
/// * `posts` - Post repository
/// * `sessions` - Session token codec keyed with the process secret
/// * `config` - Configuration the server was started with
#[derive(Clone, Debug)]
pub struct AppState {
    pub users: CredentialStore,
    pub posts: PostRepository,
    pub sessions: Arc<SessionCodec>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for CredentialStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for PostRepository {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.posts.clone()
    }
}

impl FromRef<AppState> for Arc<SessionCodec> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
