//! # shipwright_iac
//!
//! Terraform generation for managed Kubernetes cluster assets.
//!
//! A [`ClusterSpec`](shipwright_api::ClusterSpec) is turned into one terraform
//! document made of:
//!
//! - a VPC block, either creating a VPC through `terraform-aws-modules/vpc/aws`
//!   or pointing at an existing one
//! - the worker group locals
//! - the `aws` provider, the cluster name variable and the `eks` module
//!
//! Every function here is pure; writing the document is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use shipwright_api::{ClusterSpec, ExistingVpc, WorkerGroup};
//!
//! let spec = ClusterSpec::new("demo", "us-east-1")
//!     .with_vpc(ExistingVpc {
//!         vpc_id: "vpc-0123".to_string(),
//!         ..ExistingVpc::default()
//!     })
//!     .with_worker_group(WorkerGroup::new("workers", 3, "m5.large"));
//!
//! let document = shipwright_iac::assemble(&spec).unwrap();
//! assert!(document.contains("module \"eks\""));
//! ```

pub mod autoscaling;
pub mod cluster;
pub mod error;
pub mod hcl;
pub mod vpc;

pub use cluster::{assemble, AWS_PROVIDER_VERSION};
pub use error::{IacError, IacResult};
pub use vpc::VPC_MODULE_VERSION;
