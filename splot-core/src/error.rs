//! Error types for scene operations.

use thiserror::Error;

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur in scene operations.
///
/// Building a scene never fails: out-of-range widths and empty colors are
/// resolved by the default policy. Only moving a scene across a boundary can.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Scene serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
