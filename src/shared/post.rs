//! Post Wire Types
//!
//! A post is serialized in two shapes: freshly created posts carry the raw
//! author id, while posts read back for display carry the author resolved to
//! its username. Both use the same `Post<A>` struct with a different author
//! parameter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog post with an author field of type `A`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post<A = Uuid> {
    /// Unique post ID
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub content: String,
    /// Path of the stored cover image, as served under `/uploads`
    pub cover: String,
    pub author: A,
    pub created_at: DateTime<Utc>,
}

/// The subset of a user exposed alongside a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub username: String,
}

/// Post with its author resolved
///
/// The author is `None` when the referenced user no longer resolves; the
/// reference is advisory and never enforced by the store.
pub type PopulatedPost = Post<Option<AuthorSummary>>;

/// Fields supplied by the client when submitting a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover: String,
}
