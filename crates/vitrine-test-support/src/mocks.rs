//! Repository stubs for exercising degraded paths.

use vitrine_model::{Post, PostRepository, RepositoryError, RepositoryResult};

/// Repository whose queries always fail, for exercising the widget's
/// empty-state degradation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingPosts;

impl PostRepository for FailingPosts {
    fn find_by_tag(&self, _tag: &str, _limit: u32) -> RepositoryResult<Vec<Post>> {
        Err(RepositoryError::Unavailable {
            operation: "find_by_tag",
        })
    }
}
