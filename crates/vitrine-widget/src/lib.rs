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

//! Featured-posts sidebar widget.
//!
//! Renders a tag-filtered post list on the front end, a three-field
//! configuration form in the admin, and merges form submissions into the
//! persisted settings record.
//!
//! Layout: `featured.rs` (the widget and its registration function),
//! `sanitize.rs` (markup hygiene), `dates.rs` (ordinal publish dates).

pub mod dates;
pub mod featured;
pub mod sanitize;

pub use featured::{FEATURED_TAG, FeaturedPostsWidget, WIDGET_ID, register};
