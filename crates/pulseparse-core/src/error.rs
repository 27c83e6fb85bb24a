//! Error types for pulseparse-core.

use thiserror::Error;

/// Result type alias for pulseparse-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur at the boundaries of pulseparse-core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure while decoding a single column value.
///
/// These never escape [`crate::value::parse`]; they are logged and the column
/// degrades to an absent value.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Raw text was not valid JSON and the column type needs a record.
    #[error("malformed value: {0}")]
    Decode(#[source] serde_json::Error),

    /// The column type reads fields from a record but got another JSON kind.
    #[error("expected an object, got {0}")]
    NotAnObject(&'static str),

    /// A nested field had the wrong container kind.
    #[error("unexpected shape for '{field}': expected {expected}, got {found}")]
    UnexpectedShape {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Name of a JSON value's kind, for error messages.
#[must_use]
pub const fn kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
