//! Document notation for assets.
//!
//! On disk an asset is a map with exactly one key naming its kind. These
//! types mirror that layout so YAML and JSON share one shape, and the
//! conversions below map it onto the [`Asset`] enum and back.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::eks::{ClusterSpec, CreatedVpc, ExistingVpc, VpcTopology, WorkerGroup};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Asset, AssetShared, Assets, DockerAsset, DockerLayerAsset, EksAsset, GitHubAsset, HelmAsset,
    InlineAsset, TerraformAsset, WebAsset,
};

/// Top level of an asset document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetDocument {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub v1: Vec<AssetEntry>,
}

/// One entry of `v1`; exactly one field is expected to be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<InlineAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker: Option<DockerAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dockerlayer: Option<DockerLayerAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GitHubAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<WebAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helm: Option<HelmAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform: Option<TerraformAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_elastic_kubernetes_service: Option<EksAssetEntry>,
}

/// Cluster asset as written in documents, with both VPC variants optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EksAssetEntry {
    #[serde(flatten)]
    pub shared: AssetShared,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cluster_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_vpc: Option<CreatedVpc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_vpc: Option<ExistingVpc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub autoscaling_groups: Vec<WorkerGroup>,
}

impl From<EksAssetEntry> for EksAsset {
    fn from(entry: EksAssetEntry) -> Self {
        if entry.created_vpc.is_some() && entry.existing_vpc.is_some() {
            debug!(
                "Cluster {:?} sets both created_vpc and existing_vpc, using created_vpc",
                entry.cluster_name
            );
        }

        EksAsset {
            shared: entry.shared,
            cluster: ClusterSpec {
                cluster_name: entry.cluster_name,
                region: entry.region,
                vpc: VpcTopology::select(entry.created_vpc, entry.existing_vpc),
                worker_groups: entry.autoscaling_groups,
            },
        }
    }
}

impl From<&EksAsset> for EksAssetEntry {
    fn from(asset: &EksAsset) -> Self {
        let (created_vpc, existing_vpc) = match &asset.cluster.vpc {
            VpcTopology::Created(vpc) => (Some(vpc.clone()), None),
            VpcTopology::Existing(vpc) => (None, Some(vpc.clone())),
        };

        EksAssetEntry {
            shared: asset.shared.clone(),
            cluster_name: asset.cluster.cluster_name.clone(),
            region: asset.cluster.region.clone(),
            created_vpc,
            existing_vpc,
            autoscaling_groups: asset.cluster.worker_groups.clone(),
        }
    }
}

impl AssetEntry {
    /// Keys of every kind set on this entry.
    pub fn declared_kinds(&self) -> Vec<&'static str> {
        let mut kinds = Vec::new();
        if self.inline.is_some() {
            kinds.push("inline");
        }
        if self.docker.is_some() {
            kinds.push("docker");
        }
        if self.dockerlayer.is_some() {
            kinds.push("dockerlayer");
        }
        if self.github.is_some() {
            kinds.push("github");
        }
        if self.web.is_some() {
            kinds.push("web");
        }
        if self.helm.is_some() {
            kinds.push("helm");
        }
        if self.terraform.is_some() {
            kinds.push("terraform");
        }
        if self.amazon_elastic_kubernetes_service.is_some() {
            kinds.push("amazon_elastic_kubernetes_service");
        }
        kinds
    }

    /// Convert into an [`Asset`]; `index` is only used for error reporting.
    pub fn into_asset(self, index: usize) -> ApiResult<Asset> {
        let kinds = self.declared_kinds();
        if kinds.len() > 1 {
            return Err(ApiError::MultipleKinds { index, kinds });
        }

        let AssetEntry {
            inline,
            docker,
            dockerlayer,
            github,
            web,
            helm,
            terraform,
            amazon_elastic_kubernetes_service,
        } = self;

        if let Some(a) = inline {
            Ok(Asset::Inline(a))
        } else if let Some(a) = docker {
            Ok(Asset::Docker(a))
        } else if let Some(a) = dockerlayer {
            Ok(Asset::DockerLayer(a))
        } else if let Some(a) = github {
            Ok(Asset::GitHub(a))
        } else if let Some(a) = web {
            Ok(Asset::Web(a))
        } else if let Some(a) = helm {
            Ok(Asset::Helm(a))
        } else if let Some(a) = terraform {
            Ok(Asset::Terraform(a))
        } else if let Some(a) = amazon_elastic_kubernetes_service {
            Ok(Asset::AmazonElasticKubernetesService(a.into()))
        } else {
            Err(ApiError::EmptyAsset { index })
        }
    }
}

impl From<&Asset> for AssetEntry {
    fn from(asset: &Asset) -> Self {
        let mut entry = AssetEntry::default();
        match asset {
            Asset::Inline(a) => entry.inline = Some(a.clone()),
            Asset::Docker(a) => entry.docker = Some(a.clone()),
            Asset::DockerLayer(a) => entry.dockerlayer = Some(a.clone()),
            Asset::GitHub(a) => entry.github = Some(a.clone()),
            Asset::Web(a) => entry.web = Some(a.clone()),
            Asset::Helm(a) => entry.helm = Some(a.clone()),
            Asset::Terraform(a) => entry.terraform = Some(a.clone()),
            Asset::AmazonElasticKubernetesService(a) => {
                entry.amazon_elastic_kubernetes_service = Some(a.into())
            }
        }
        entry
    }
}

impl AssetDocument {
    pub fn into_assets(self) -> ApiResult<Assets> {
        let v1 = self
            .v1
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_asset(index))
            .collect::<ApiResult<Vec<_>>>()?;
        Ok(Assets::new(v1))
    }
}

impl From<&Assets> for AssetDocument {
    fn from(assets: &Assets) -> Self {
        Self {
            v1: assets.v1.iter().map(AssetEntry::from).collect(),
        }
    }
}
