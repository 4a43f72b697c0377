//! Post record and repository capability consumed by widgets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// A content item surfaced by the host's post store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Display title of the post.
    pub title: String,
    /// Canonical link to the post.
    pub permalink: Url,
    /// Publish timestamp, rendered with an ordinal day suffix.
    pub published_at: DateTime<Utc>,
}

/// Errors surfaced by post repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The underlying post store could not be queried.
    #[error("post store unavailable")]
    Unavailable {
        /// Operation identifier.
        operation: &'static str,
    },
}

/// Convenience alias for repository results.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Tag-filtered query capability supplied by the host's content store.
///
/// Implementations must tolerate `limit == 0` by returning an empty
/// sequence and must preserve store ordering in the returned posts.
pub trait PostRepository: Send + Sync {
    /// Fetch up to `limit` posts carrying `tag`, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when the store cannot be queried; the
    /// widget degrades such failures to its empty-state rendering.
    fn find_by_tag(&self, tag: &str, limit: u32) -> RepositoryResult<Vec<Post>>;
}
