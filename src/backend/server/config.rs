/**
 * Database Bootstrap
 *
 * This module opens the SQLite connection pool named by `DATABASE_URL` and
 * brings its schema up to date.
 *
 * # Error Handling
 *
 * Unlike optional services, the database is required: a connection or
 * migration failure aborts startup.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Pool size for file-backed databases
const MAX_CONNECTIONS: u32 = 5;

/// Open the database and run migrations
///
/// This function:
/// 1. Parses the connection string, creating the database file if missing
/// 2. Creates the connection pool
/// 3. Runs the embedded migrations
///
/// In-memory databases exist per connection, so they get a single connection
/// that is never recycled.
///
/// # Example
///
/// ```rust,no_run
/// use inkpost::backend::server::config::connect_database;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = connect_database("sqlite::memory:").await?;
/// # Ok(())
/// # }
/// ```
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(5))
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
