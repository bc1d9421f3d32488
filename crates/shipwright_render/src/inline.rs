//! Inline asset rendering and the atomic file write behind it.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use shipwright_api::{Asset, AssetKind, InlineAsset};

use crate::context::RenderContext;
use crate::error::{RenderError, RenderResult};
use crate::renderer::{InlineRender, Renderer};

/// Writes inline contents to `dest` below the output root.
///
/// `dest` is templated strictly, `contents` leniently so that text carrying
/// its own `{{...}}` syntax survives. The write goes through a temporary file
/// in the destination directory and a rename, so `dest` either holds the
/// whole contents or is left as it was.
#[derive(Debug, Default, Clone)]
pub struct InlineRenderer;

impl InlineRenderer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InlineRender for InlineRenderer {
    async fn render_inline(&self, asset: &InlineAsset, ctx: &RenderContext) -> RenderResult<()> {
        let dest = ctx.template_strict(&asset.shared.dest)?;
        let target = ctx.resolve_dest(&dest)?;
        let contents = ctx.template_lenient(&asset.contents);
        let mode = asset.shared.effective_mode();

        info!("Writing {} bytes to {:?}", contents.len(), target);

        let written = target.clone();
        tokio::task::spawn_blocking(move || write_atomic(&written, contents.as_bytes(), mode))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))??;

        debug!("Wrote {:?} with mode {:o}", target, mode);
        Ok(())
    }
}

#[async_trait]
impl Renderer for InlineRenderer {
    fn kind(&self) -> AssetKind {
        AssetKind::Inline
    }

    async fn render(&self, asset: &Asset, ctx: &RenderContext) -> RenderResult<()> {
        match asset {
            Asset::Inline(inline) => self.render_inline(inline, ctx).await,
            other => Err(RenderError::KindMismatch {
                expected: AssetKind::Inline,
                actual: other.kind(),
            }),
        }
    }
}

/// Write all bytes to `target` or leave it untouched.
pub fn write_atomic(target: &Path, contents: &[u8], mode: u32) -> RenderResult<()> {
    let parent = target
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&parent)?;

    let mut file = NamedTempFile::new_in(&parent)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    set_mode(&file, mode)?;

    file.persist(target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn set_mode(file: &NamedTempFile, mode: u32) -> RenderResult<()> {
    use std::os::unix::fs::PermissionsExt;

    file.as_file()
        .set_permissions(fs::Permissions::from_mode(mode & 0o7777))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_file: &NamedTempFile, _mode: u32) -> RenderResult<()> {
    Ok(())
}
