//! The featured-posts widget and its registration function.
//!
//! # Design
//! - Render paths are infallible: absent fields are skipped, repository
//!   failures degrade to the empty-state prompt.
//! - The merge path owns input coercion; the render path owns the falsy
//!   post-count fallback. Descriptions are stored verbatim and sanitized
//!   only when displayed.

use std::sync::Arc;

use tracing::debug;
use vitrine_host::i18n::{self, DEFAULT_LOCALE};
use vitrine_host::{HostResult, WidgetRegistry};
use vitrine_model::{
    DEFAULT_POST_COUNT, FormContext, Post, PostRepository, RenderContext, SettingsInput, Widget,
    WidgetDescriptor, WidgetSettings, coerce_unsigned,
};

use crate::dates::format_publish_date;
use crate::sanitize;

/// Stable identifier the widget registers under.
pub const WIDGET_ID: &str = "vitrine_featured_posts";

/// Tag that marks a post as featured.
pub const FEATURED_TAG: &str = "featured";

const WIDGET_CLASSNAME: &str = "vitrine-featured-posts-widget";

const EMPTY_PROMPT: &str = "Tag your posts as 'featured' to make them display in this widget.";

/// Sidebar widget listing the most recent posts tagged
/// [`FEATURED_TAG`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FeaturedPostsWidget;

/// Register the featured-posts widget with a host registry.
///
/// Hosts call this once at startup; there is no load-time side effect.
///
/// # Errors
///
/// Fails when a widget with the same id is already registered.
pub fn register(registry: &mut WidgetRegistry) -> HostResult<()> {
    registry.register(Arc::new(FeaturedPostsWidget))
}

impl FeaturedPostsWidget {
    /// Render the tag-filtered post list.
    ///
    /// A `post_count` of zero behaves as [`DEFAULT_POST_COUNT`]; this is
    /// the falsy fallback the stored zero coerced from `""` relies on.
    /// Query failures and an empty store both render the empty-state
    /// prompt after an empty list wrapper.
    #[must_use]
    pub fn featured_list(posts: &dyn PostRepository, post_count: u32) -> String {
        let limit = if post_count == 0 {
            DEFAULT_POST_COUNT
        } else {
            post_count
        };
        let found = posts
            .find_by_tag(FEATURED_TAG, limit)
            .unwrap_or_else(|err| {
                debug!(error = %err, "featured post query failed, rendering empty state");
                Vec::new()
            });

        let mut out = String::new();
        if found.is_empty() {
            out.push_str("<ul></ul>\n");
            out.push_str("<p>");
            out.push_str(&i18n::localize(DEFAULT_LOCALE, EMPTY_PROMPT));
            out.push_str("</p>\n");
            return out;
        }
        out.push_str("<ul>\n");
        for post in &found {
            push_list_item(&mut out, post);
        }
        out.push_str("</ul>\n");
        out
    }
}

fn push_list_item(out: &mut String, post: &Post) {
    let title = sanitize::escape_attr(&post.title);
    out.push_str("<li class=\"vitrine-featured-post\">\n");
    out.push_str("<span class=\"vitrine-post-title\">");
    out.push_str(&format!(
        "<a href=\"{}\" rel=\"bookmark\" title=\"Permanent Link to {title}\">{title}</a>",
        sanitize::escape_attr(post.permalink.as_str())
    ));
    out.push_str("</span>\n");
    out.push_str(&format!(
        "<small class=\"vitrine-post-date\">{}</small>\n",
        format_publish_date(post.published_at)
    ));
    out.push_str("</li>\n");
}

impl Widget for FeaturedPostsWidget {
    fn descriptor(&self) -> WidgetDescriptor {
        WidgetDescriptor {
            id: WIDGET_ID,
            name: i18n::localize(DEFAULT_LOCALE, "Featured Posts Widget"),
            classname: WIDGET_CLASSNAME,
            description: i18n::localize(DEFAULT_LOCALE, "Display your most important posts."),
            selective_refresh: true,
        }
    }

    fn render(
        &self,
        ctx: &RenderContext,
        settings: &WidgetSettings,
        posts: &dyn PostRepository,
    ) -> String {
        let mut out = String::new();
        out.push_str(&ctx.before_widget);
        out.push('\n');

        if !settings.title.is_empty() {
            out.push_str(&ctx.before_title);
            out.push_str(&settings.title);
            out.push_str(&ctx.after_title);
            out.push('\n');
        }

        let description = settings.description_text();
        if !description.is_empty() {
            out.push_str("<div class=\"widget-description\">");
            out.push_str(&sanitize::filter_html(&sanitize::autop(description)));
            out.push_str("</div>\n");
        }

        out.push_str(&Self::featured_list(posts, settings.post_count));
        out.push_str(&ctx.after_widget);
        out
    }

    fn form(&self, form: &FormContext, settings: &WidgetSettings) -> String {
        // Mirrors the display pipeline's escape-then-filter order; the
        // filter is an identity on escaped text, which keeps the value
        // textually recoverable when the form is resubmitted.
        let description = sanitize::filter_html(&sanitize::escape_attr(settings.description_text()));
        let mut out = String::new();
        out.push_str(&format!(
            "<p>{}</p>\n",
            i18n::localize(DEFAULT_LOCALE, EMPTY_PROMPT)
        ));
        out.push_str(&format!(
            "<p>\n<label for=\"{id}\">{label}</label>\n<input class=\"widget-field\" type=\"text\" id=\"{id}\" name=\"{name}\" value=\"{value}\" />\n</p>\n",
            id = form.field_id("title"),
            name = form.field_name("title"),
            label = i18n::localize(DEFAULT_LOCALE, "Title:"),
            value = sanitize::escape_attr(&settings.title),
        ));
        out.push_str(&format!(
            "<p>\n<label for=\"{id}\">{label}</label>\n<textarea class=\"widget-field\" id=\"{id}\" name=\"{name}\" rows=\"5\" cols=\"20\">{description}</textarea>\n</p>\n",
            id = form.field_id("description"),
            name = form.field_name("description"),
            label = i18n::localize(DEFAULT_LOCALE, "Widget Text:"),
        ));
        out.push_str(&format!(
            "<p>\n<label for=\"{id}\">{label}</label>\n<input class=\"widget-field\" type=\"text\" id=\"{id}\" name=\"{name}\" value=\"{value}\" />\n</p>\n",
            id = form.field_id("post_count"),
            name = form.field_name("post_count"),
            label = i18n::localize(DEFAULT_LOCALE, "Show how many posts?:"),
            value = settings.post_count,
        ));
        out
    }

    fn update(&self, input: SettingsInput, previous: WidgetSettings) -> WidgetSettings {
        let mut next = previous;
        if let Some(title) = input.title {
            next.title = sanitize::strip_tags(&title);
        }
        if let Some(count) = input.post_count {
            next.post_count = coerce_unsigned(&count);
        }
        if let Some(description) = input.description {
            next.description = Some(description);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_test_support::fixtures::{featured_repository, sample_settings};
    use vitrine_test_support::mocks::FailingPosts;

    #[test]
    fn zero_count_falls_back_to_default() {
        let repo = featured_repository(8);
        let markup = FeaturedPostsWidget::featured_list(&repo, 0);
        assert_eq!(markup.matches("<li class=").count(), 5);
    }

    #[test]
    fn list_is_capped_at_post_count() {
        let repo = featured_repository(8);
        let markup = FeaturedPostsWidget::featured_list(&repo, 3);
        assert_eq!(markup.matches("<li class=").count(), 3);
    }

    #[test]
    fn short_store_returns_everything() {
        let repo = featured_repository(2);
        let markup = FeaturedPostsWidget::featured_list(&repo, 5);
        assert_eq!(markup.matches("<li class=").count(), 2);
    }

    #[test]
    fn empty_store_renders_prompt_outside_wrapper() {
        let repo = featured_repository(0);
        let markup = FeaturedPostsWidget::featured_list(&repo, 5);
        let wrapper = markup.find("<ul></ul>").expect("empty wrapper expected");
        let prompt = markup.find(EMPTY_PROMPT).expect("prompt expected");
        assert!(wrapper < prompt);
    }

    #[test]
    fn query_failure_degrades_to_empty_state() {
        let markup = FeaturedPostsWidget::featured_list(&FailingPosts, 5);
        assert!(markup.contains("<ul></ul>"));
        assert!(markup.contains(EMPTY_PROMPT));
    }

    #[test]
    fn update_coerces_and_defers_description_sanitization() {
        let widget = FeaturedPostsWidget;
        let input = SettingsInput {
            title: Some("<b>Hi</b>".to_string()),
            post_count: Some("-3".to_string()),
            description: Some("<script>x</script>".to_string()),
        };
        let merged = widget.update(input, WidgetSettings::default());
        assert_eq!(merged.title, "Hi");
        assert_eq!(merged.post_count, 3);
        assert_eq!(merged.description.as_deref(), Some("<script>x</script>"));
    }

    #[test]
    fn update_preserves_fields_absent_from_submission() {
        let widget = FeaturedPostsWidget;
        let previous = sample_settings();
        let merged = widget.update(SettingsInput::default(), previous.clone());
        assert_eq!(merged, previous);
    }

    #[test]
    fn render_skips_empty_title_and_description() {
        let widget = FeaturedPostsWidget;
        let ctx = RenderContext {
            before_widget: "<section>".to_string(),
            after_widget: "</section>".to_string(),
            before_title: "<h2>".to_string(),
            after_title: "</h2>".to_string(),
        };
        let settings = WidgetSettings {
            title: String::new(),
            description: None,
            post_count: 2,
        };
        let markup = widget.render(&ctx, &settings, &featured_repository(2));
        assert!(markup.starts_with("<section>\n<ul>"));
        assert!(markup.ends_with("</ul>\n</section>"));
        assert!(!markup.contains("<h2>"));
        assert!(!markup.contains("widget-description"));
    }

    #[test]
    fn render_emits_title_and_sanitized_description() {
        let widget = FeaturedPostsWidget;
        let ctx = RenderContext::bare();
        let settings = WidgetSettings {
            title: "Reading List".to_string(),
            description: Some("hello <script>x</script>\n\nworld".to_string()),
            post_count: 1,
        };
        let markup = widget.render(&ctx, &settings, &featured_repository(1));
        assert!(markup.contains("Reading List"));
        assert!(markup.contains("<div class=\"widget-description\"><p>hello x</p>\n<p>world</p>\n</div>"));
    }

    #[test]
    fn descriptor_is_stable() {
        let descriptor = FeaturedPostsWidget.descriptor();
        assert_eq!(descriptor.id, WIDGET_ID);
        assert_eq!(descriptor.classname, WIDGET_CLASSNAME);
        assert!(descriptor.selective_refresh);
    }
}
