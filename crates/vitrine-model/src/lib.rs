#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared models and capability traits for the vitrine widget toolkit.
//!
//! Layout: `settings.rs` (typed placement settings and form input),
//! `post.rs` (post record and repository trait), `widget.rs` (widget
//! capability trait and render/form contexts).

pub mod post;
pub mod settings;
pub mod widget;

pub use post::{Post, PostRepository, RepositoryError, RepositoryResult};
pub use settings::{
    DEFAULT_POST_COUNT, DEFAULT_TITLE, SettingsInput, WidgetSettings, coerce_unsigned,
};
pub use widget::{FormContext, RenderContext, Widget, WidgetDescriptor};
