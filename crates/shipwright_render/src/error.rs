//! Error types for rendering.

use shipwright_api::AssetKind;
use thiserror::Error;

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering assets.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No renderer registered for {0} assets")]
    NoRenderer(AssetKind),

    #[error("Renderer for {expected} assets was given a {actual} asset")]
    KindMismatch { expected: AssetKind, actual: AssetKind },

    #[error("Invalid destination '{dest}': {reason}")]
    InvalidDestination { dest: String, reason: String },

    #[error("Invalid asset: {0}")]
    InvalidAsset(String),

    #[error("Template variable not provided: {0}")]
    MissingVariable(String),

    #[error("Invalid when predicate '{when}': evaluated to '{value}'")]
    InvalidWhen { when: String, value: String },

    #[error("Invalid config value: {0}")]
    InvalidConfig(String),

    #[error("Failed to render asset {index} ({kind}): {source}")]
    Asset {
        index: usize,
        kind: AssetKind,
        #[source]
        source: Box<RenderError>,
    },

    #[error("Write task failed: {0}")]
    Task(String),

    #[error("IaC error: {0}")]
    Iac(#[from] shipwright_iac::IacError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RenderError {
    /// The error at the bottom of any per-asset wrapping.
    pub fn root(&self) -> &RenderError {
        match self {
            RenderError::Asset { source, .. } => source.root(),
            other => other,
        }
    }
}
