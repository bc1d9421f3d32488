//! Renderer registry keyed by asset kind.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use shipwright_api::AssetKind;

use crate::eks::EksRenderer;
use crate::error::{RenderError, RenderResult};
use crate::inline::InlineRenderer;
use crate::renderer::{InlineRender, Renderer};
use crate::terraform::TerraformRenderer;

/// A registry of renderer implementations.
///
/// Each asset kind maps to at most one renderer. Registering a renderer for a
/// kind that already has one replaces it.
#[derive(Default)]
pub struct RendererRegistry {
    renderers: HashMap<AssetKind, Arc<dyn Renderer>>,
}

impl RendererRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Registry with the inline, terraform and cluster renderers.
    ///
    /// The terraform renderer gets no GitHub renderer here; use
    /// [`RendererRegistry::register_github`] to add one for both.
    pub fn with_defaults() -> Self {
        let inline = Arc::new(InlineRenderer::new());
        let mut registry = Self::new();
        registry.register(inline.clone());
        registry.register(Arc::new(TerraformRenderer::new(inline.clone())));
        registry.register(Arc::new(EksRenderer::new(inline)));
        registry
    }

    /// Register a renderer under its `kind()`.
    pub fn register(&mut self, renderer: Arc<dyn Renderer>) {
        let kind = renderer.kind();
        debug!("Registering renderer: {}", kind);
        self.renderers.insert(kind, renderer);
    }

    /// Register a GitHub renderer, also wiring it into a fresh terraform renderer.
    pub fn register_github(&mut self, github: Arc<dyn Renderer>, inline: Arc<dyn InlineRender>) {
        self.register(github.clone());
        self.register(Arc::new(TerraformRenderer::new(inline).with_github(github)));
    }

    /// Get a renderer by kind.
    pub fn get(&self, kind: AssetKind) -> Option<Arc<dyn Renderer>> {
        self.renderers.get(&kind).cloned()
    }

    /// Get a renderer by kind, returning an error if not found.
    pub fn get_required(&self, kind: AssetKind) -> RenderResult<Arc<dyn Renderer>> {
        self.get(kind).ok_or(RenderError::NoRenderer(kind))
    }

    pub fn contains(&self, kind: AssetKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Registered kinds, sorted.
    pub fn kinds(&self) -> Vec<AssetKind> {
        let mut kinds: Vec<_> = self.renderers.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    pub fn unregister(&mut self, kind: AssetKind) -> Option<Arc<dyn Renderer>> {
        debug!("Unregistering renderer: {}", kind);
        self.renderers.remove(&kind)
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("renderers", &self.kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RenderContext;
    use async_trait::async_trait;
    use shipwright_api::Asset;

    struct NoopRenderer(AssetKind);

    #[async_trait]
    impl Renderer for NoopRenderer {
        fn kind(&self) -> AssetKind {
            self.0
        }

        async fn render(&self, _asset: &Asset, _ctx: &RenderContext) -> RenderResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_registry_defaults() {
        let registry = RendererRegistry::with_defaults();
        assert_eq!(
            registry.kinds(),
            vec![
                AssetKind::Inline,
                AssetKind::Terraform,
                AssetKind::AmazonElasticKubernetesService
            ]
        );
        assert!(!registry.contains(AssetKind::Docker));
    }

    #[test]
    fn test_registry_register_and_replace() {
        let mut registry = RendererRegistry::new();
        assert!(registry.is_empty());

        registry.register(Arc::new(NoopRenderer(AssetKind::Web)));
        registry.register(Arc::new(NoopRenderer(AssetKind::Web)));
        assert_eq!(registry.len(), 1);
        assert!(registry.get(AssetKind::Web).is_some());
    }

    #[test]
    fn test_registry_missing_kind() {
        let registry = RendererRegistry::new();
        let err = registry.get_required(AssetKind::Helm).err().unwrap();
        assert!(matches!(err, RenderError::NoRenderer(AssetKind::Helm)));
    }

    #[test]
    fn test_registry_github_wiring() {
        let mut registry = RendererRegistry::with_defaults();
        registry.register_github(
            Arc::new(NoopRenderer(AssetKind::GitHub)),
            Arc::new(InlineRenderer::new()),
        );
        assert!(registry.contains(AssetKind::GitHub));
        assert_eq!(registry.len(), 4);

        registry.unregister(AssetKind::GitHub);
        assert!(!registry.contains(AssetKind::GitHub));
    }
}
