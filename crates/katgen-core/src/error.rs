//! Error types for the KAT generator core.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while grouping, rendering, or decoding records.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field required by the template is absent from the record.
    #[error("missing field `{field}` in record")]
    MissingField { field: String },

    /// The template name is not recognised.
    #[error("unknown template: {0} (expected `aead` or `hash`)")]
    UnknownTemplate(String),

    /// The `Count` field is not a decimal integer.
    #[error("invalid count `{value}`: {source}")]
    InvalidCount {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A byte field is not valid hex.
    #[error("invalid hex in field `{field}`: {source}")]
    InvalidHex {
        field: String,
        #[source]
        source: hex::FromHexError,
    },

    /// I/O error while reading vectors or writing declarations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
