/**
 * Post Handlers
 *
 * HTTP handlers for creating and reading posts.
 *
 * # Submission Order
 *
 * `POST /post` stores and normalizes the cover image before it verifies the
 * session cookie. A rejected token therefore leaves the renamed image behind
 * in the upload directory; no post row is written.
 */
use axum::{
    extract::{multipart::{Field, MultipartRejection}, Multipart, Path, State},
    http::HeaderMap,
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::{BackendError, ValidationError};
use crate::backend::middleware::session_token;
use crate::backend::posts::db::{PostRepository, DEFAULT_LIST_LIMIT};
use crate::backend::posts::upload::{normalize, store_temp_file};
use crate::backend::server::state::AppState;
use crate::shared::{NewPost, PopulatedPost, Post};

/// Name of the multipart field carrying the cover image
pub const COVER_FIELD: &str = "files";

/// Cover image as received from the client
struct CoverUpload {
    file_name: String,
    bytes: axum::body::Bytes,
}

/// Text fields and cover image of a submitted post
#[derive(Default)]
struct Submission {
    title: String,
    summary: String,
    content: String,
    cover: Option<CoverUpload>,
}

/// Oversized bodies keep their 413; anything else is a 400
fn malformed(err: axum::extract::multipart::MultipartError) -> BackendError {
    tracing::warn!("Malformed multipart body: {}", err);
    BackendError::handler(err.status(), err.body_text())
}

async fn text_of(field: Field<'_>) -> Result<String, BackendError> {
    field.text().await.map_err(malformed)
}

/// Drain the multipart body into a `Submission`
///
/// Unknown fields are skipped. Missing text fields stay empty.
async fn read_submission(mut multipart: Multipart) -> Result<Submission, BackendError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => submission.title = text_of(field).await?,
            "summary" => submission.summary = text_of(field).await?,
            "content" => submission.content = text_of(field).await?,
            COVER_FIELD => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(malformed)?;
                submission.cover = Some(CoverUpload { file_name, bytes });
            }
            other => tracing::debug!("Ignoring multipart field {}", other),
        }
    }

    Ok(submission)
}

/// Create a post
///
/// # Arguments
///
/// * `State(state)` - Application state (upload directory, codec, repository)
/// * `headers` - Request headers, read for the `token` cookie
/// * `multipart` - Body with `title`, `summary`, `content` and a `files` part
///
/// # Returns
///
/// The created post, with its author as a raw user id
///
/// # Errors
///
/// * `400 Bad Request` - Missing `files` part, non-multipart or malformed body, or invalid token
/// * `413 Payload Too Large` - Body exceeds the configured upload limit
/// * `500 Internal Server Error` - If the image cannot be stored or the insert fails
///
/// # Example Request
///
/// ```http
/// POST /post HTTP/1.1
/// Cookie: token=eyJ...
/// Content-Type: multipart/form-data; boundary=X
/// ```
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Post>, BackendError> {
    let submission = read_submission(multipart?).await?;
    let cover = submission
        .cover
        .ok_or(ValidationError::MissingField(COVER_FIELD))?;

    let temp_path = store_temp_file(&state.config.upload_dir, &cover.bytes).await?;
    let cover_path = normalize(&temp_path, &cover.file_name).await?;

    let token = session_token(&headers).unwrap_or_default();
    let claims = state.sessions.verify(&token).inspect_err(|_| {
        tracing::warn!(
            "Post submission with invalid token, leaving {} in place",
            cover_path.display()
        )
    })?;

    let post = state
        .posts
        .create(
            NewPost {
                title: submission.title,
                summary: submission.summary,
                content: submission.content,
                cover: cover_path.to_string_lossy().into_owned(),
            },
            claims.id,
        )
        .await?;

    tracing::info!("Post {} created by {}", post.id, claims.username);
    Ok(Json(post))
}

/// List the most recent posts, newest first
pub async fn list_posts(
    State(posts): State<PostRepository>,
) -> Result<Json<Vec<PopulatedPost>>, BackendError> {
    Ok(Json(posts.list_recent(DEFAULT_LIST_LIMIT).await?))
}

/// Fetch one post by id
///
/// # Errors
///
/// * `404 Not Found` - If the id is not a UUID or no such post exists
pub async fn get_post(
    State(posts): State<PostRepository>,
    Path(id): Path<String>,
) -> Result<Json<PopulatedPost>, BackendError> {
    let id = Uuid::parse_str(&id).map_err(|_| BackendError::not_found("Post"))?;

    posts
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found("Post"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::create_user;
    use crate::backend::server::config::connect_database;
    use axum::http::StatusCode;

    async fn setup() -> (PostRepository, Uuid) {
        let pool = connect_database("sqlite::memory:").await.unwrap();
        let user = create_user(&pool, "alice", "hash".to_string()).await.unwrap();
        (PostRepository::new(pool), user.id)
    }

    fn fields(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            cover: "uploads/x.png".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_get_post_found() {
        let (repo, author) = setup().await;
        let created = repo.create(fields("Hi"), author).await.unwrap();

        let Json(post) = get_post(State(repo), Path(created.id.to_string()))
            .await
            .unwrap();
        assert_eq!(post.title, "Hi");
        assert_eq!(post.author.unwrap().username, "alice");
    }

    #[tokio::test]
    async fn test_get_post_unknown_id() {
        let (repo, _) = setup().await;
        let err = get_post(State(repo), Path(Uuid::new_v4().to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_post_malformed_id() {
        let (repo, _) = setup().await;
        let err = get_post(State(repo), Path("not-a-uuid".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Post not found");
    }

    #[tokio::test]
    async fn test_list_posts_newest_first() {
        let (repo, author) = setup().await;
        repo.create(fields("older"), author).await.unwrap();
        repo.create(fields("newer"), author).await.unwrap();

        let Json(posts) = list_posts(State(repo)).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "newer");
    }
}
