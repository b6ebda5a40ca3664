//! Error types for the generator.

use std::path::PathBuf;

use katgen_core::CoreError;
use thiserror::Error;

/// Errors that can occur while generating declarations.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The vector file could not be opened.
    #[error("cannot open vector file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsing or rendering failed.
    #[error("generation failed: {0}")]
    Core(#[from] CoreError),

    /// A naming parameter is unusable.
    #[error("invalid {name}: {reason}")]
    InvalidName { name: &'static str, reason: String },

    /// Bad command line.
    #[error("{0}")]
    Usage(String),
}

impl GenerateError {
    /// Whether this error means the vector file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GenerateError::Open { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
