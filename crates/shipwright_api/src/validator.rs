//! Asset validation utilities.
//!
//! The renderers do not validate on their own; the cluster renderer only logs
//! [`AssetValidator::cluster_warnings`]. The CLI checks a document before use:
//! `validate` reports errors and warnings, and `render` refuses to render a
//! document that has errors.

use std::path::{Component, Path};

use crate::eks::{ClusterSpec, VpcTopology};
use crate::models::{Asset, AssetShared, Assets};

/// Validation result with details.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validator for asset documents.
pub struct AssetValidator;

impl AssetValidator {
    /// Validate every asset of a document.
    pub fn validate(assets: &Assets) -> ValidationResult {
        let mut result = ValidationResult::new();
        for (index, asset) in assets.v1.iter().enumerate() {
            result.merge(Self::validate_asset(index, asset));
        }
        result
    }

    /// Validate a single asset at position `index`.
    pub fn validate_asset(index: usize, asset: &Asset) -> ValidationResult {
        let label = format!("Asset {} ({})", index, asset.kind());
        let mut result = Self::validate_shared(&label, asset.shared());

        match asset {
            Asset::Inline(inline) => {
                if inline.shared.dest.trim().is_empty() {
                    result.add_error(format!("{label}: inline asset requires a dest"));
                }
            }
            Asset::Docker(docker) => {
                if docker.image.is_empty() {
                    result.add_error(format!("{label}: docker asset requires an image"));
                }
            }
            Asset::DockerLayer(layer) => {
                if layer.docker.image.is_empty() {
                    result.add_error(format!("{label}: docker layer asset requires an image"));
                }
                if layer.layer.is_empty() {
                    result.add_error(format!("{label}: docker layer asset requires a layer"));
                }
            }
            Asset::GitHub(github) => {
                if github.repo.is_empty() {
                    result.add_error(format!("{label}: github asset requires a repo"));
                }
            }
            Asset::Web(web) => {
                if web.url.is_empty() {
                    result.add_error(format!("{label}: web asset requires a url"));
                }
            }
            Asset::Helm(helm) => {
                if helm.github.is_none() && helm.local.is_none() {
                    result.add_error(format!(
                        "{label}: helm asset requires either github or local chart source"
                    ));
                }
            }
            Asset::Terraform(terraform) => {
                if terraform.github.is_none() && terraform.inline.is_empty() {
                    result.add_error(format!(
                        "{label}: terraform asset requires either github or inline module"
                    ));
                }
            }
            Asset::AmazonElasticKubernetesService(eks) => {
                for warning in Self::cluster_warnings(&eks.cluster) {
                    result.add_warning(format!("{label}: {warning}"));
                }
            }
        }

        result
    }

    /// Suspicious but renderable cluster settings.
    ///
    /// Negative sizes and mismatched zone/subnet lists are rendered as given.
    pub fn cluster_warnings(cluster: &ClusterSpec) -> Vec<String> {
        let mut warnings = Vec::new();

        if cluster.cluster_name.is_empty() {
            warnings.push("cluster_name is empty".to_string());
        }

        if let VpcTopology::Created(vpc) = &cluster.vpc {
            let zones = vpc.availability_zones.len();
            for (name, subnets) in [
                ("public_subnets", &vpc.public_subnets),
                ("private_subnets", &vpc.private_subnets),
            ] {
                if subnets.len() != zones {
                    warnings.push(format!(
                        "created_vpc has {} zones but {} {}",
                        zones,
                        subnets.len(),
                        name
                    ));
                }
            }
        }

        for group in &cluster.worker_groups {
            if group.size < 0 {
                warnings.push(format!(
                    "autoscaling group '{}' has negative group_size {}",
                    group.name, group.size
                ));
            }
        }

        warnings
    }

    fn validate_shared(label: &str, shared: &AssetShared) -> ValidationResult {
        let mut result = ValidationResult::new();

        let dest = Path::new(&shared.dest);
        if dest.is_absolute() || shared.dest.starts_with('/') {
            result.add_error(format!("{label}: dest '{}' must be a relative path", shared.dest));
        } else if dest.components().any(|c| matches!(c, Component::ParentDir)) {
            result.add_error(format!(
                "{label}: dest '{}' must not leave the output directory",
                shared.dest
            ));
        }

        if shared.mode & !0o7777 != 0 {
            result.add_warning(format!(
                "{label}: mode {:o} has bits outside 7777 which are ignored",
                shared.mode
            ));
        }

        result
    }
}
