//! # shipwright_render
//!
//! Asset rendering for shipwright.
//!
//! The [`AssetDispatcher`] walks an asset document in order, evaluates each
//! asset's `when` predicate and hands it to the renderer registered for its
//! kind. Inline files, inline terraform modules and managed Kubernetes
//! clusters are rendered here; docker, GitHub, web and helm renderers are
//! plugged in through the [`RendererRegistry`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use shipwright_api::AssetReader;
//! use shipwright_render::{AssetDispatcher, ConfigValues, RenderContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let assets = AssetReader::read_file("ship.yaml")?;
//!     let ctx = RenderContext::new("./out")
//!         .with_values(ConfigValues::new().with("install_eks", "true"));
//!
//!     let report = AssetDispatcher::default().execute(&assets, &ctx).await?;
//!     println!("rendered {} asset(s)", report.rendered.len());
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod dispatcher;
pub mod eks;
pub mod error;
pub mod inline;
pub mod registry;
pub mod renderer;
pub mod template;
pub mod terraform;
pub mod when;

pub use context::{ConfigValues, RenderContext};
pub use dispatcher::{AssetDispatcher, DispatchedAsset, RenderReport};
pub use eks::{EksRenderer, DEFAULT_EKS_DEST};
pub use error::{RenderError, RenderResult};
pub use inline::{write_atomic, InlineRenderer};
pub use registry::RendererRegistry;
pub use renderer::{InlineRender, Renderer};
pub use template::TemplateEngine;
pub use terraform::{TerraformRenderer, DEFAULT_TERRAFORM_DEST};
