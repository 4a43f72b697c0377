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

//! Demo host wiring for the featured-posts widget.
//!
//! Layout: `bootstrap.rs` (host wiring and the demo render), `telemetry.rs`
//! (tracing subscriber install), `error.rs` (application error type).

/// Host wiring and the demo render.
pub mod bootstrap;
mod error;
/// Tracing subscriber installation.
pub mod telemetry;

pub use bootstrap::run_app;
pub use error::{AppError, AppResult};
