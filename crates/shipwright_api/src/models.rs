//! Data models for asset specifications.

use std::collections::BTreeMap;

use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::eks::ClusterSpec;
use crate::error::ApiError;

/// Permission bits applied when an asset does not set `mode`.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// The asset kinds a document can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    Inline,
    Docker,
    DockerLayer,
    GitHub,
    Web,
    Helm,
    Terraform,
    AmazonElasticKubernetesService,
}

impl AssetKind {
    /// Key used for this kind in asset documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Inline => "inline",
            AssetKind::Docker => "docker",
            AssetKind::DockerLayer => "dockerlayer",
            AssetKind::GitHub => "github",
            AssetKind::Web => "web",
            AssetKind::Helm => "helm",
            AssetKind::Terraform => "terraform",
            AssetKind::AmazonElasticKubernetesService => "amazon_elastic_kubernetes_service",
        }
    }

    pub const ALL: [AssetKind; 8] = [
        AssetKind::Inline,
        AssetKind::Docker,
        AssetKind::DockerLayer,
        AssetKind::GitHub,
        AssetKind::Web,
        AssetKind::Helm,
        AssetKind::Terraform,
        AssetKind::AmazonElasticKubernetesService,
    ];
}

impl FromStr for AssetKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ApiError::UnknownKind(s.to_string()))
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attributes common to every asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetShared {
    /// Where the rendered output goes, relative to the output root
    pub dest: String,
    /// Unix permission bits for the output (0 means the default)
    #[serde(deserialize_with = "deserialize_mode")]
    pub mode: u32,
    /// Optional human-readable description
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Optional predicate deciding whether the asset is rendered at all
    #[serde(skip_serializing_if = "String::is_empty")]
    pub when: String,
}

impl AssetShared {
    pub fn new(dest: impl Into<String>) -> Self {
        Self {
            dest: dest.into(),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Permission bits to write with.
    pub fn effective_mode(&self) -> u32 {
        if self.mode == 0 {
            DEFAULT_FILE_MODE
        } else {
            self.mode
        }
    }
}

/// Accept `mode` as an integer or as an octal string (`0755`, `0o755`).
///
/// YAML 1.2 reads a leading-zero number as a string, so permission bits
/// written the usual way arrive here as text.
fn deserialize_mode<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawMode {
        Bits(u32),
        Text(String),
    }

    match RawMode::deserialize(deserializer)? {
        RawMode::Bits(mode) => Ok(mode),
        RawMode::Text(text) => parse_mode(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid file mode '{text}'"))),
    }
}

fn parse_mode(text: &str) -> Option<u32> {
    let text = text.trim();
    if let Some(octal) = text.strip_prefix("0o") {
        return u32::from_str_radix(octal, 8).ok();
    }
    if text.len() > 1 && text.starts_with('0') {
        return u32::from_str_radix(&text[1..], 8).ok();
    }
    text.parse().ok()
}

/// An asset whose contents are given directly in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineAsset {
    #[serde(flatten)]
    pub shared: AssetShared,
    pub contents: String,
}

impl InlineAsset {
    pub fn new(shared: AssetShared, contents: impl Into<String>) -> Self {
        Self {
            shared,
            contents: contents.into(),
        }
    }
}

/// A docker image to save at `dest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerAsset {
    #[serde(flatten)]
    pub shared: AssetShared,
    pub image: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
}

/// A single layer of a docker image, unpacked at `dest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerLayerAsset {
    #[serde(flatten)]
    pub docker: DockerAsset,
    pub layer: String,
}

/// Files pulled from a GitHub repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubAsset {
    #[serde(flatten)]
    pub shared: AssetShared,
    pub repo: String,
    #[serde(rename = "ref", skip_serializing_if = "String::is_empty")]
    pub git_ref: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
}

/// Content fetched over HTTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebAsset {
    #[serde(flatten)]
    pub shared: AssetShared,
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub method: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,
    #[serde(rename = "bodyFormat", skip_serializing_if = "String::is_empty")]
    pub body_format: String,
}

/// A helm chart templated into `dest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelmAsset {
    #[serde(flatten)]
    pub shared: AssetShared,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub helm_opts: Vec<String>,
    /// Repository the chart is pulled from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GitHubAsset>,
    /// Chart already present on disk from an earlier asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<LocalHelmOpts>,
}

/// A chart rooted at a path rendered by an earlier asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalHelmOpts {
    pub chart_root: String,
}

/// A terraform module, either pulled from GitHub or written inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerraformAsset {
    #[serde(flatten)]
    pub shared: AssetShared,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GitHubAsset>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inline: String,
}

/// Terraform for a managed Kubernetes cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EksAsset {
    pub shared: AssetShared,
    pub cluster: ClusterSpec,
}

/// A spec for one deployable artifact.
#[derive(Debug, Clone, PartialEq)]
pub enum Asset {
    Inline(InlineAsset),
    Docker(DockerAsset),
    DockerLayer(DockerLayerAsset),
    GitHub(GitHubAsset),
    Web(WebAsset),
    Helm(HelmAsset),
    Terraform(TerraformAsset),
    AmazonElasticKubernetesService(EksAsset),
}

impl Asset {
    pub fn kind(&self) -> AssetKind {
        match self {
            Asset::Inline(_) => AssetKind::Inline,
            Asset::Docker(_) => AssetKind::Docker,
            Asset::DockerLayer(_) => AssetKind::DockerLayer,
            Asset::GitHub(_) => AssetKind::GitHub,
            Asset::Web(_) => AssetKind::Web,
            Asset::Helm(_) => AssetKind::Helm,
            Asset::Terraform(_) => AssetKind::Terraform,
            Asset::AmazonElasticKubernetesService(_) => AssetKind::AmazonElasticKubernetesService,
        }
    }

    pub fn shared(&self) -> &AssetShared {
        match self {
            Asset::Inline(a) => &a.shared,
            Asset::Docker(a) => &a.shared,
            Asset::DockerLayer(a) => &a.docker.shared,
            Asset::GitHub(a) => &a.shared,
            Asset::Web(a) => &a.shared,
            Asset::Helm(a) => &a.shared,
            Asset::Terraform(a) => &a.shared,
            Asset::AmazonElasticKubernetesService(a) => &a.shared,
        }
    }
}

/// The top level assets document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assets {
    pub v1: Vec<Asset>,
}

impl Assets {
    pub fn new(v1: Vec<Asset>) -> Self {
        Self { v1 }
    }

    pub fn len(&self) -> usize {
        self.v1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v1.is_empty()
    }

    /// Iterate over the cluster assets, keeping their position in the document.
    pub fn eks_assets(&self) -> impl Iterator<Item = (usize, &EksAsset)> {
        self.v1.iter().enumerate().filter_map(|(i, asset)| match asset {
            Asset::AmazonElasticKubernetesService(eks) => Some((i, eks)),
            _ => None,
        })
    }
}
