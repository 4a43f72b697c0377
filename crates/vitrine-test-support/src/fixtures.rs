//! Post and settings builders shared by unit and integration suites.

use chrono::{DateTime, Duration, TimeZone, Utc};
use url::Url;
use vitrine_content::MemoryPosts;
use vitrine_model::{Post, WidgetSettings};

/// Deterministic base timestamp for fixture posts.
///
/// # Panics
///
/// Panics if the hard-coded calendar date stops being valid, which cannot
/// happen outside a chrono regression.
#[must_use]
pub fn base_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .expect("fixture timestamp should be unambiguous")
}

/// A post titled `title`, published `days_after` days after the base
/// timestamp.
///
/// # Panics
///
/// Panics if `title` produces a slug that does not form a valid URL.
#[must_use]
pub fn post(title: &str, days_after: i64) -> Post {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    Post {
        title: title.to_string(),
        permalink: Url::parse(&format!("https://blog.example/{slug}"))
            .expect("fixture permalink should parse"),
        published_at: base_timestamp() + Duration::days(days_after),
    }
}

/// A store holding `featured` posts titled `Post 1` through `Post {count}`
/// in order, plus one unfeatured post that must never render.
#[must_use]
pub fn featured_repository(count: usize) -> MemoryPosts {
    let mut store = MemoryPosts::new();
    for index in 1..=count {
        store.insert(
            post(&format!("Post {index}"), i64::try_from(index).unwrap_or(0)),
            ["featured"],
        );
    }
    store.insert(post("Unrelated", 0), ["news"]);
    store
}

/// A fully configured settings record distinct from the defaults.
#[must_use]
pub fn sample_settings() -> WidgetSettings {
    WidgetSettings {
        title: "Reading List".to_string(),
        description: Some("Our <em>weekly</em> picks".to_string()),
        post_count: 4,
    }
}
