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

//! Reference widget host: registration table, per-placement settings
//! persistence, sidebar assembly, and the static assets a host wires up
//! once at startup.
//!
//! Layout: `registry.rs` (widget registration table), `store.rs`
//! (instance settings persistence), `host.rs` (`WidgetHost` facade),
//! `assets.rs` (embedded stylesheet), `i18n.rs` (translation bundle),
//! `error.rs` (host error type).

pub mod assets;
pub mod error;
pub mod host;
pub mod i18n;
pub mod registry;
pub mod store;

pub use error::{HostError, HostResult};
pub use host::WidgetHost;
pub use registry::WidgetRegistry;
pub use store::InstanceStore;
