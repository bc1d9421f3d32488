//! Managed Kubernetes cluster asset rendering.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use shipwright_api::{Asset, AssetKind, AssetValidator, EksAsset, InlineAsset};

use crate::context::RenderContext;
use crate::error::{RenderError, RenderResult};
use crate::renderer::{InlineRender, Renderer};

/// Destination used when a cluster asset leaves `dest` empty.
pub const DEFAULT_EKS_DEST: &str = "amazon_elastic_kubernetes_service.tf";

/// Generates the cluster terraform and writes it through an inline renderer.
pub struct EksRenderer {
    inline: Arc<dyn InlineRender>,
}

impl EksRenderer {
    pub fn new(inline: Arc<dyn InlineRender>) -> Self {
        Self { inline }
    }

    pub async fn render_eks(&self, asset: &EksAsset, ctx: &RenderContext) -> RenderResult<()> {
        let cluster = &asset.cluster;
        info!(
            "Generating terraform for cluster {:?} in region {:?}",
            cluster.cluster_name, cluster.region
        );

        for warning in AssetValidator::cluster_warnings(cluster) {
            warn!("Cluster {:?}: {}", cluster.cluster_name, warning);
        }

        let contents = shipwright_iac::assemble(cluster)?;

        let mut shared = asset.shared.clone();
        if shared.dest.trim().is_empty() {
            shared.dest = DEFAULT_EKS_DEST.to_string();
        }

        self.inline
            .render_inline(&InlineAsset::new(shared, contents), ctx)
            .await
    }
}

#[async_trait]
impl Renderer for EksRenderer {
    fn kind(&self) -> AssetKind {
        AssetKind::AmazonElasticKubernetesService
    }

    async fn render(&self, asset: &Asset, ctx: &RenderContext) -> RenderResult<()> {
        match asset {
            Asset::AmazonElasticKubernetesService(eks) => self.render_eks(eks, ctx).await,
            other => Err(RenderError::KindMismatch {
                expected: AssetKind::AmazonElasticKubernetesService,
                actual: other.kind(),
            }),
        }
    }
}
