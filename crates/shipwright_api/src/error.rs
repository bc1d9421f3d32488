//! Error types for the asset schema.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schema operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while reading or writing asset documents.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Asset {index} does not declare any asset kind")]
    EmptyAsset { index: usize },

    #[error("Asset {index} declares more than one asset kind: {}", kinds.join(", "))]
    MultipleKinds { index: usize, kinds: Vec<&'static str> },

    #[error("Unknown asset kind: {0}")]
    UnknownKind(String),

    #[error("Unsupported asset document format for file {0}")]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
