//! # Design
//!
//! - Centralize application-level errors for the demo host wiring.
//! - Keep error messages constant while carrying context fields for
//!   debugging.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Widget host operations failed.
    #[error("widget host operation failed")]
    Host {
        /// Operation identifier.
        operation: &'static str,
        /// Source host error.
        source: vitrine_host::HostError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: anyhow::Error,
    },
    /// Demo content could not be constructed.
    #[error("invalid demo content")]
    Seed {
        /// Field that failed to build.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

impl AppError {
    #[allow(clippy::redundant_pub_crate)]
    pub(crate) const fn host(operation: &'static str, source: vitrine_host::HostError) -> Self {
        Self::Host { operation, source }
    }

    #[allow(clippy::redundant_pub_crate)]
    pub(crate) const fn telemetry(operation: &'static str, source: anyhow::Error) -> Self {
        Self::Telemetry { operation, source }
    }
}
