//! # shipwright_api
//!
//! Asset specification schema for shipwright.
//!
//! An asset document lists the artifacts a release is made of: inline files,
//! docker images and layers, GitHub files, web content, helm charts,
//! terraform modules and managed Kubernetes clusters. This crate holds the
//! in-memory model of that list and its YAML/JSON notation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use shipwright_api::{AssetReader, AssetValidator};
//!
//! let assets = AssetReader::read_file("ship.yaml").unwrap();
//!
//! let result = AssetValidator::validate(&assets);
//! for error in &result.errors {
//!     eprintln!("Error: {}", error);
//! }
//!
//! for (index, eks) in assets.eks_assets() {
//!     println!("{}: cluster {}", index, eks.cluster.cluster_name);
//! }
//! ```

pub mod eks;
pub mod error;
pub mod models;
pub mod reader;
pub mod validator;
pub mod wire;
pub mod writer;

pub use eks::{ClusterSpec, CreatedVpc, ExistingVpc, VpcTopology, WorkerGroup};
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use reader::{AssetReader, DocumentFormat};
pub use validator::{AssetValidator, ValidationResult};
pub use wire::{AssetDocument, AssetEntry, EksAssetEntry};
pub use writer::AssetWriter;
