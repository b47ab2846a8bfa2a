//! Script emitter error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for script emission.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors that can occur while writing a script.
///
/// A failed write may leave a partial script behind; scripts are disposable
/// so no attempt is made to roll it back.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The output file could not be created. Nothing was written.
    #[error("Failed to create {}: {source}", path.display())]
    Create {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing or flushing the sink failed.
    #[error("Failed to write script: {0}")]
    Write(#[from] std::io::Error),
}
