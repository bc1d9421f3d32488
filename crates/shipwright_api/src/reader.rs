//! Asset document reading utilities.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::models::Assets;
use crate::wire::AssetDocument;

/// Document notations understood by the reader and writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the notation from a file extension. Files without one are YAML.
    pub fn from_path(path: &Path) -> ApiResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            None => Ok(DocumentFormat::Yaml),
            Some(ext) => match ext.to_lowercase().as_str() {
                "yaml" | "yml" => Ok(DocumentFormat::Yaml),
                "json" => Ok(DocumentFormat::Json),
                _ => Err(ApiError::UnsupportedFormat(path.to_path_buf())),
            },
        }
    }
}

/// Reader for asset documents.
pub struct AssetReader;

impl AssetReader {
    /// Parse a YAML asset document.
    pub fn from_yaml_str(content: &str) -> ApiResult<Assets> {
        let document: AssetDocument = serde_yaml::from_str(content)?;
        document.into_assets()
    }

    /// Parse a JSON asset document.
    pub fn from_json_str(content: &str) -> ApiResult<Assets> {
        let document: AssetDocument = serde_json::from_str(content)?;
        document.into_assets()
    }

    /// Read an asset document, choosing the notation by extension.
    pub fn read_file(path: impl AsRef<Path>) -> ApiResult<Assets> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        debug!("Reading {:?} asset document from {:?}", format, path);

        let content = fs::read_to_string(path)?;
        match format {
            DocumentFormat::Yaml => Self::from_yaml_str(&content),
            DocumentFormat::Json => Self::from_json_str(&content),
        }
    }
}
