//! Asset document writing utilities.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ApiResult;
use crate::models::Assets;
use crate::reader::DocumentFormat;
use crate::wire::AssetDocument;

/// Writer for asset documents.
pub struct AssetWriter;

impl AssetWriter {
    pub fn to_yaml_string(assets: &Assets) -> ApiResult<String> {
        Ok(serde_yaml::to_string(&AssetDocument::from(assets))?)
    }

    pub fn to_json_string(assets: &Assets) -> ApiResult<String> {
        Ok(serde_json::to_string_pretty(&AssetDocument::from(assets))?)
    }

    /// Write an asset document, choosing the notation by extension.
    pub fn write_file(assets: &Assets, path: impl AsRef<Path>) -> ApiResult<()> {
        let path = path.as_ref();
        let content = match DocumentFormat::from_path(path)? {
            DocumentFormat::Yaml => Self::to_yaml_string(assets)?,
            DocumentFormat::Json => Self::to_json_string(assets)?,
        };

        debug!("Writing asset document to {:?}", path);
        fs::write(path, content)?;
        Ok(())
    }
}
