//! Error types for decoding documents and navigating them by path.

use crate::value::Kind;
use thiserror::Error;

/// Errors that can occur while decoding a document or resolving a path in it.
#[derive(Error, Debug)]
pub enum DjsonError {
    /// The input bytes were not valid JSON. Carries the parser diagnostic
    /// (line, column and cause).
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The path continues past a scalar value, which has no children.
    #[error("leaf node: cannot select '{segment}' from a {kind} value")]
    LeafNode { segment: String, kind: Kind },

    /// An array was reached but the segment is not a non-negative integer
    /// literal within the accepted index range.
    #[error("invalid array index '{segment}'")]
    IndexParse { segment: String },

    /// The segment parsed as an index but the array is too short.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// An object was reached but has no member with this key.
    #[error("key '{key}' not found")]
    KeyNotFound { key: String },
}

/// Convenience alias used throughout djson-core.
pub type Result<T> = std::result::Result<T, DjsonError>;
