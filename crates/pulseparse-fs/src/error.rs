//! Error types for input loading and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for filesystem operations.
pub type Result<T> = std::result::Result<T, FsError>;

/// Errors that can occur while reading inputs or configuration.
#[derive(Debug, Error)]
pub enum FsError {
    /// Input path does not exist.
    #[error("input not found at '{0}'")]
    InputNotFound(PathBuf),

    /// Explicitly requested config file does not exist.
    #[error("config not found at '{0}'")]
    ConfigNotFound(PathBuf),

    /// Config file would be overwritten.
    #[error("config already exists at '{0}'")]
    ConfigExists(PathBuf),

    /// Top-level JSON was neither an item nor a list of items.
    #[error("unsupported input in {source_name}: expected an item or an array of items, got {found}")]
    UnsupportedInput {
        source_name: String,
        found: &'static str,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// YAML parsing error.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
