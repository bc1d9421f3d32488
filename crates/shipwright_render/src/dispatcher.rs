//! Asset dispatch: `when` evaluation and per-kind renderer lookup.

use tracing::{debug, info};

use shipwright_api::{AssetKind, Assets};

use crate::context::RenderContext;
use crate::error::{RenderError, RenderResult};
use crate::registry::RendererRegistry;
use crate::when;

/// One asset the dispatcher looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedAsset {
    pub index: usize,
    pub kind: AssetKind,
    pub dest: String,
}

/// What a dispatch run did.
#[derive(Debug, Default)]
pub struct RenderReport {
    pub rendered: Vec<DispatchedAsset>,
    pub skipped: Vec<DispatchedAsset>,
}

impl RenderReport {
    pub fn total(&self) -> usize {
        self.rendered.len() + self.skipped.len()
    }
}

/// Renders every asset of a document in order.
#[derive(Debug)]
pub struct AssetDispatcher {
    registry: RendererRegistry,
}

impl Default for AssetDispatcher {
    fn default() -> Self {
        Self::new(RendererRegistry::with_defaults())
    }
}

impl AssetDispatcher {
    pub fn new(registry: RendererRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    /// Render all assets, stopping at the first failure.
    ///
    /// Errors are wrapped with the index and kind of the failing asset.
    pub async fn execute(&self, assets: &Assets, ctx: &RenderContext) -> RenderResult<RenderReport> {
        info!(
            "Rendering {} asset(s) into {:?}",
            assets.len(),
            ctx.output_root()
        );

        let mut report = RenderReport::default();
        for (index, asset) in assets.v1.iter().enumerate() {
            let kind = asset.kind();
            let wrap = move |source: RenderError| RenderError::Asset {
                index,
                kind,
                source: Box::new(source),
            };
            let entry = DispatchedAsset {
                index,
                kind,
                dest: asset.shared().dest.clone(),
            };

            if !when::evaluate(&asset.shared().when, ctx).map_err(wrap)? {
                info!("Skipping asset {} ({}): when is false", index, kind);
                report.skipped.push(entry);
                continue;
            }

            let renderer = self.registry.get_required(kind).map_err(wrap)?;
            debug!("Rendering asset {} ({}) to {:?}", index, kind, entry.dest);
            renderer.render(asset, ctx).await.map_err(wrap)?;
            report.rendered.push(entry);
        }

        info!(
            "Rendered {} asset(s), skipped {}",
            report.rendered.len(),
            report.skipped.len()
        );
        Ok(report)
    }
}
