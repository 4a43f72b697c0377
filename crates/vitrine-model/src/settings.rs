//! Typed placement settings and admin-form input payloads.
//!
//! # Design
//! - Pure data carriers shared by the widget and the host framework.
//! - Absent or malformed fields degrade to defaults instead of failing;
//!   the save path owns coercion, the render path owns the falsy fallback.

use serde::{Deserialize, Serialize};

/// Heading used when a placement has not been configured yet.
pub const DEFAULT_TITLE: &str = "Featured Posts";

/// Number of posts fetched when the stored count is zero or unset.
pub const DEFAULT_POST_COUNT: u32 = 5;

/// Persisted configuration for one widget placement.
///
/// The host serializes this record as JSON and hands it back on every
/// render/form/save call. Placements are independent copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// Display heading shown above the post list.
    #[serde(default = "default_title")]
    pub title: String,
    /// Optional rich-text blurb shown under the title. Stored verbatim;
    /// sanitized to a safe HTML subset at render time.
    #[serde(default)]
    pub description: Option<String>,
    /// Number of posts to fetch. A stored zero falls back to
    /// [`DEFAULT_POST_COUNT`] at render time.
    #[serde(default = "default_post_count")]
    pub post_count: u32,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

const fn default_post_count() -> u32 {
    DEFAULT_POST_COUNT
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: None,
            post_count: DEFAULT_POST_COUNT,
        }
    }
}

impl WidgetSettings {
    /// Description text, treating `None` and `""` alike.
    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Raw admin-form submission for one placement.
///
/// Every field is optional; absent fields leave the previous value
/// untouched, which defends against partial submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsInput {
    /// Submitted heading, tag-stripped on save.
    #[serde(default)]
    pub title: Option<String>,
    /// Submitted rich-text blurb, stored verbatim.
    #[serde(default)]
    pub description: Option<String>,
    /// Submitted post count as typed, coerced with [`coerce_unsigned`].
    #[serde(default)]
    pub post_count: Option<String>,
}

/// Coerce a form value to a non-negative integer.
///
/// Matches `absint`-style semantics: leading whitespace is skipped, an
/// optional sign is consumed, the leading digit run is parsed and the sign
/// discarded. `"-3"` yields 3, `"12abc"` yields 12, `"abc"` and `""` yield 0.
#[must_use]
pub fn coerce_unsigned(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return 0;
    }
    // A digit run that overflows u64 saturates.
    digits
        .parse::<u64>()
        .map_or(u32::MAX, |value| u32::try_from(value).unwrap_or(u32::MAX))
}
