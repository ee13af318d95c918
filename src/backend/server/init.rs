/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the database and run migrations
 * 2. Make sure the upload directory exists
 * 3. Build the stores and the session codec from configuration
 * 4. Create and configure the router
 */

use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::auth::sessions::SessionCodec;
use crate::backend::auth::users::CredentialStore;
use crate::backend::error::{BackendError, UploadError};
use crate::backend::posts::db::PostRepository;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::connect_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Assemble application state over an open pool
pub fn build_state(config: AppConfig, pool: SqlitePool) -> AppState {
    AppState {
        users: CredentialStore::new(pool.clone(), config.bcrypt_cost),
        posts: PostRepository::new(pool),
        sessions: Arc::new(SessionCodec::new(&config.jwt_secret)),
        config: Arc::new(config),
    }
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated, or when the upload
/// directory cannot be created. The server does not start without either.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing blog backend");

    let pool = connect_database(&config.database_url).await?;

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .map_err(|source| UploadError::Write {
            path: config.upload_dir.clone(),
            source,
        })?;
    tracing::info!("Serving uploads from {}", config.upload_dir.display());

    let app_state = build_state(config, pool);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
