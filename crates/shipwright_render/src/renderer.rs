//! Renderer traits.

use async_trait::async_trait;

use shipwright_api::{Asset, AssetKind, InlineAsset};

use crate::context::RenderContext;
use crate::error::RenderResult;

/// Renders one kind of asset into the output directory.
///
/// Implementations for docker images, GitHub files, web content and helm
/// charts live outside this crate and are registered with the
/// [`RendererRegistry`](crate::RendererRegistry).
#[async_trait]
pub trait Renderer: Send + Sync {
    /// The asset kind this renderer handles.
    fn kind(&self) -> AssetKind;

    /// Render the asset. The `when` predicate has already been evaluated.
    async fn render(&self, asset: &Asset, ctx: &RenderContext) -> RenderResult<()>;
}

/// Writes inline content to an asset destination.
///
/// Generated assets hand their text to this collaborator as the `contents`
/// of an [`InlineAsset`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InlineRender: Send + Sync {
    async fn render_inline(&self, asset: &InlineAsset, ctx: &RenderContext) -> RenderResult<()>;
}
