//! Error types for host framework operations.
//!
//! # Design
//! - Keep error messages constant while carrying context fields.
//! - Widget render paths never produce errors; these cover caller
//!   mistakes and storage serialization only.

use thiserror::Error;
use uuid::Uuid;

/// Primary error type for widget host operations.
#[derive(Debug, Error)]
pub enum HostError {
    /// No widget is registered under the requested identifier.
    #[error("unknown widget")]
    UnknownWidget {
        /// Identifier that failed to resolve.
        id: String,
    },
    /// A widget with the same identifier is already registered.
    #[error("widget already registered")]
    DuplicateWidget {
        /// Identifier of the colliding widget.
        id: &'static str,
    },
    /// No placement exists under the requested instance id.
    #[error("unknown widget instance")]
    UnknownInstance {
        /// Instance id that failed to resolve.
        instance: Uuid,
    },
    /// Stored settings could not be serialized or deserialized.
    #[error("settings serialization failed")]
    Storage {
        /// Operation identifier.
        operation: &'static str,
        /// Source serialization error.
        source: serde_json::Error,
    },
}

/// Convenience alias for host results.
pub type HostResult<T> = Result<T, HostError>;
