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

//! Shared test helpers used across the widget suites.
//! Layout: fixtures.rs (posts and settings builders), mocks.rs (failing
//! repository stub).

pub mod fixtures;
pub mod mocks;
