/**
 * Post Persistence
 *
 * Stores post rows and reads them back with the author resolved to its
 * username. The author column is a plain user id: nothing enforces that it
 * still resolves, and a dangling reference reads back as `author: null`.
 */

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{AuthorSummary, NewPost, PopulatedPost, Post};

/// Number of posts returned by `list_recent` by default
pub const DEFAULT_LIST_LIMIT: u32 = 20;

/// Fixed-width timestamp encoding, so lexical order is chronological
fn encode_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

fn decode_uuid(raw: &str) -> Result<Uuid, sqlx::Error> {
    Uuid::parse_str(raw).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

#[derive(sqlx::FromRow)]
struct PopulatedPostRow {
    id: String,
    title: String,
    summary: String,
    content: String,
    cover: String,
    created_at: String,
    author_username: Option<String>,
}

impl TryFrom<PopulatedPostRow> for PopulatedPost {
    type Error = sqlx::Error;

    fn try_from(row: PopulatedPostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: decode_uuid(&row.id)?,
            title: row.title,
            summary: row.summary,
            content: row.content,
            cover: row.cover,
            author: row
                .author_username
                .map(|username| AuthorSummary { username }),
            created_at: decode_timestamp(&row.created_at)?,
        })
    }
}

const SELECT_POPULATED: &str = r#"
    SELECT p.id, p.title, p.summary, p.content, p.cover, p.created_at,
           u.username AS author_username
    FROM posts p
    LEFT JOIN users u ON u.id = p.author
"#;

/// Stores and queries posts
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new post authored by `author`
    ///
    /// # Returns
    /// The created post, with the raw author id. `created_at` is cut to the
    /// stored microsecond precision so it matches later reads.
    pub async fn create(&self, fields: NewPost, author: Uuid) -> Result<Post, sqlx::Error> {
        let post = Post {
            id: Uuid::new_v4(),
            title: fields.title,
            summary: fields.summary,
            content: fields.content,
            cover: fields.cover,
            author,
            created_at: Utc::now().trunc_subsecs(6),
        };

        sqlx::query(
            r#"
            INSERT INTO posts (id, title, summary, content, cover, author, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(post.id.to_string())
        .bind(&post.title)
        .bind(&post.summary)
        .bind(&post.content)
        .bind(&post.cover)
        .bind(post.author.to_string())
        .bind(encode_timestamp(post.created_at))
        .execute(&self.pool)
        .await?;

        Ok(post)
    }

    /// Most recent posts first, at most `limit` of them
    pub async fn list_recent(&self, limit: u32) -> Result<Vec<PopulatedPost>, sqlx::Error> {
        let query = format!(
            "{} ORDER BY p.created_at DESC, p.rowid DESC LIMIT ?",
            SELECT_POPULATED
        );

        let rows = sqlx::query_as::<_, PopulatedPostRow>(&query)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(PopulatedPost::try_from).collect()
    }

    /// One post by id
    ///
    /// # Returns
    /// The post, or None if not found
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<PopulatedPost>, sqlx::Error> {
        let query = format!("{} WHERE p.id = ?", SELECT_POPULATED);

        let row = sqlx::query_as::<_, PopulatedPostRow>(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(PopulatedPost::try_from).transpose()
    }
}
