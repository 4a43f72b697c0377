//! Wires the reference host, content store, and widget together and
//! renders a demo sidebar to stdout.

use chrono::{TimeZone, Utc};
use tracing::{debug, info};
use url::Url;
use vitrine_content::MemoryPosts;
use vitrine_host::{WidgetHost, assets};
use vitrine_model::{Post, SettingsInput};
use vitrine_widget::{WIDGET_ID, register};

use crate::error::{AppError, AppResult};
use crate::telemetry;

/// Bootstraps the demo host and prints the rendered sidebar.
///
/// # Errors
///
/// Fails when the tracing subscriber cannot be installed or a host
/// operation is rejected.
pub fn run_app() -> AppResult<()> {
    telemetry::init_logging()
        .map_err(|source| AppError::telemetry("init_logging", source))?;

    let mut host = WidgetHost::new();
    register(host.registry_mut())
        .map_err(|source| AppError::host("registry.register", source))?;
    info!(widgets = ?host.registry().ids(), "widgets registered");

    let posts = seed_posts()?;
    let instance = host
        .add_instance(WIDGET_ID)
        .map_err(|source| AppError::host("host.add_instance", source))?;
    let saved = host
        .save_settings(
            instance,
            SettingsInput {
                title: Some("Editor's Picks".to_string()),
                description: Some(
                    "Stories our editors keep coming back to.\n\nUpdated weekly.".to_string(),
                ),
                post_count: Some("3".to_string()),
            },
        )
        .map_err(|source| AppError::host("host.save_settings", source))?;

    let form = host
        .form_for(instance)
        .map_err(|source| AppError::host("host.form_for", source))?;
    debug!(form_bytes = form.len(), "admin form rendered");

    let sidebar = host
        .render_sidebar(&posts)
        .map_err(|source| AppError::host("host.render_sidebar", source))?;

    println!("<style>\n{}</style>", assets::stylesheet());
    println!("{sidebar}");
    info!(instance = %instance, post_count = saved.post_count, "sidebar rendered");
    Ok(())
}

fn seed_posts() -> AppResult<MemoryPosts> {
    let mut store = MemoryPosts::new();
    for (title, slug, day, tags) in [
        (
            "The Case for Smaller Tools",
            "case-for-smaller-tools",
            3,
            &["featured", "essays"][..],
        ),
        (
            "A Field Guide to Sidebars",
            "field-guide-to-sidebars",
            11,
            &["featured"][..],
        ),
        (
            "Release Notes, Annotated",
            "release-notes-annotated",
            21,
            &["featured", "news"][..],
        ),
        ("Changelog Digest", "changelog-digest", 28, &["news"][..]),
    ] {
        store.insert(demo_post(title, slug, day)?, tags.iter().copied());
    }
    Ok(store)
}

fn demo_post(title: &str, slug: &str, day: u32) -> AppResult<Post> {
    let permalink =
        Url::parse(&format!("https://blog.example/{slug}")).map_err(|_| AppError::Seed {
            field: "permalink",
            value: slug.to_string(),
        })?;
    let published_at = Utc
        .with_ymd_and_hms(2024, 1, day, 9, 0, 0)
        .single()
        .ok_or_else(|| AppError::Seed {
            field: "published_at",
            value: day.to_string(),
        })?;
    Ok(Post {
        title: title.to_string(),
        permalink,
        published_at,
    })
}
