//! Terraform module asset rendering.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use shipwright_api::{Asset, AssetKind, InlineAsset, TerraformAsset};

use crate::context::RenderContext;
use crate::error::{RenderError, RenderResult};
use crate::renderer::{InlineRender, Renderer};

/// Destination used when an inline terraform module leaves `dest` empty.
pub const DEFAULT_TERRAFORM_DEST: &str = "main.tf";

/// Writes inline terraform modules and forwards GitHub-hosted ones.
pub struct TerraformRenderer {
    inline: Arc<dyn InlineRender>,
    github: Option<Arc<dyn Renderer>>,
}

impl TerraformRenderer {
    pub fn new(inline: Arc<dyn InlineRender>) -> Self {
        Self {
            inline,
            github: None,
        }
    }

    /// Renderer used for modules pulled from GitHub.
    pub fn with_github(mut self, github: Arc<dyn Renderer>) -> Self {
        self.github = Some(github);
        self
    }

    pub async fn render_terraform(
        &self,
        asset: &TerraformAsset,
        ctx: &RenderContext,
    ) -> RenderResult<()> {
        if let Some(github) = &asset.github {
            let renderer = self
                .github
                .as_ref()
                .ok_or(RenderError::NoRenderer(AssetKind::GitHub))?;

            let mut github = github.clone();
            if github.shared.dest.trim().is_empty() {
                github.shared = asset.shared.clone();
            }

            info!("Fetching terraform module from {}", github.repo);
            return renderer.render(&Asset::GitHub(github), ctx).await;
        }

        if asset.inline.is_empty() {
            return Err(RenderError::InvalidAsset(
                "terraform asset requires either github or inline module".to_string(),
            ));
        }

        let mut shared = asset.shared.clone();
        if shared.dest.trim().is_empty() {
            shared.dest = DEFAULT_TERRAFORM_DEST.to_string();
        }

        self.inline
            .render_inline(&InlineAsset::new(shared, asset.inline.clone()), ctx)
            .await
    }
}

#[async_trait]
impl Renderer for TerraformRenderer {
    fn kind(&self) -> AssetKind {
        AssetKind::Terraform
    }

    async fn render(&self, asset: &Asset, ctx: &RenderContext) -> RenderResult<()> {
        match asset {
            Asset::Terraform(terraform) => self.render_terraform(terraform, ctx).await,
            other => Err(RenderError::KindMismatch {
                expected: AssetKind::Terraform,
                actual: other.kind(),
            }),
        }
    }
}
