/**
 * User Model and Credential Store
 *
 * This module owns user records: registration with a salted bcrypt hash,
 * and authentication of a username/password pair.
 */

use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::sessions::Identity;
use crate::backend::error::{AuthError, BackendError, ValidationError};

/// Minimum username length, in characters
pub const MIN_USERNAME_LENGTH: usize = 4;

/// User struct representing a user in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, at least 4 chars)
    pub username: String,
    /// Hashed password (bcrypt); never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.id,
            username: self.username.clone(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    username: String,
    password_hash: String,
}

impl TryFrom<UserRow> for User {
    type Error = sqlx::Error;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&row.id).map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            username: row.username,
            password_hash: row.password_hash,
        })
    }
}

/// Insert a user row
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query("INSERT INTO users (id, username, password_hash) VALUES (?, ?, ?)")
        .bind(id.to_string())
        .bind(username)
        .bind(&password_hash)
        .execute(pool)
        .await?;

    Ok(User {
        id,
        username: username.to_string(),
        password_hash,
    })
}

/// Get user by username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, username, password_hash FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    row.map(User::try_from).transpose()
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(ValidationError::TooShort {
            field: "username",
            min: MIN_USERNAME_LENGTH,
        });
    }
    Ok(())
}

/// Registers and authenticates users
#[derive(Debug, Clone)]
pub struct CredentialStore {
    pool: SqlitePool,
    hash_cost: u32,
}

impl CredentialStore {
    pub fn new(pool: SqlitePool, hash_cost: u32) -> Self {
        Self { pool, hash_cost }
    }

    /// Register a new user
    ///
    /// # Errors
    /// * `ValidationError::TooShort` - username shorter than 4 characters
    /// * `ValidationError::DuplicateUsername` - username already registered
    pub async fn register(&self, username: &str, password: &str) -> Result<User, BackendError> {
        validate_username(username)?;

        if get_user_by_username(&self.pool, username).await?.is_some() {
            return Err(ValidationError::DuplicateUsername(username.to_string()).into());
        }

        let password_hash = bcrypt::hash(password, self.hash_cost)?;

        create_user(&self.pool, username, password_hash)
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent registration
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    ValidationError::DuplicateUsername(username.to_string()).into()
                }
                other => BackendError::from(other),
            })
    }

    /// Check a username/password pair
    ///
    /// # Errors
    /// * `AuthError::NotFound` - no such username
    /// * `AuthError::WrongCredentials` - password does not match
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Identity, BackendError> {
        let user = get_user_by_username(&self.pool, username)
            .await?
            .ok_or(AuthError::NotFound)?;

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AuthError::WrongCredentials.into());
        }

        Ok(user.identity())
    }
}
