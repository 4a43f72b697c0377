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

//! Binary entrypoint that wires the demo widget host together and prints
//! the rendered sidebar.

use vitrine_app::{AppResult, run_app};

/// Renders the demo sidebar and exits.
fn main() -> AppResult<()> {
    run_app()
}
