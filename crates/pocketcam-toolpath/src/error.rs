//! Error types for the toolpath crate.
//!
//! Every failure here is local to one operation: the caller decides not to
//! commit the operation and carries on.

use pocketcam_core::GeometryError;
use thiserror::Error;

/// Errors that can occur while building a pocket operation.
#[derive(Error, Debug)]
pub enum PocketError {
    /// The operation cannot be applied to the given boundary.
    #[error("Inapplicable operation: {0}")]
    Inapplicable(String),

    /// Invalid parameters were provided to the operation.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// A long-running fill computation was cancelled.
    #[error("Computation cancelled")]
    Cancelled,

    /// A geometric primitive could not be built.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for pocket operations.
pub type PocketResult<T> = Result<T, PocketError>;
