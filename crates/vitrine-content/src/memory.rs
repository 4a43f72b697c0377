//! Ordered in-memory post store keyed by tag.

use vitrine_model::{Post, PostRepository, RepositoryResult};

/// In-memory [`PostRepository`] preserving insertion order.
///
/// Serves as the reference store for the demo host and for tests; a real
/// host supplies its own content backend behind the same trait.
#[derive(Debug, Clone, Default)]
pub struct MemoryPosts {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    post: Post,
    tags: Vec<String>,
}

impl MemoryPosts {
    /// Empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a post carrying the given tags.
    pub fn insert<I, T>(&mut self, post: Post, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.entries.push(Entry {
            post,
            tags: tags.into_iter().map(Into::into).collect(),
        });
    }

    /// Number of stored posts across all tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no posts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PostRepository for MemoryPosts {
    fn find_by_tag(&self, tag: &str, limit: u32) -> RepositoryResult<Vec<Post>> {
        let posts = self
            .entries
            .iter()
            .filter(|entry| entry.tags.iter().any(|candidate| candidate == tag))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .map(|entry| entry.post.clone())
            .collect();
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use url::Url;

    fn post(title: &str) -> Post {
        Post {
            title: title.to_string(),
            permalink: Url::parse(&format!("https://blog.example/{title}"))
                .expect("fixture permalink should parse"),
            published_at: Utc
                .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
                .single()
                .expect("fixture timestamp should be unambiguous"),
        }
    }

    fn seeded() -> MemoryPosts {
        let mut store = MemoryPosts::new();
        store.insert(post("first"), ["featured"]);
        store.insert(post("second"), ["news"]);
        store.insert(post("third"), ["featured", "news"]);
        store
    }

    #[test]
    fn filters_by_tag_in_insertion_order() {
        let store = seeded();
        let posts = store
            .find_by_tag("featured", 10)
            .expect("memory store should not fail");
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["first", "third"]);
    }

    #[test]
    fn honors_limit() {
        let store = seeded();
        let posts = store
            .find_by_tag("featured", 1)
            .expect("memory store should not fail");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "first");
    }

    #[test]
    fn zero_limit_returns_empty() {
        let store = seeded();
        let posts = store
            .find_by_tag("featured", 0)
            .expect("memory store should not fail");
        assert!(posts.is_empty());
    }

    #[test]
    fn unknown_tag_returns_empty() {
        let store = seeded();
        let posts = store
            .find_by_tag("missing", 10)
            .expect("memory store should not fail");
        assert!(posts.is_empty());
    }
}
