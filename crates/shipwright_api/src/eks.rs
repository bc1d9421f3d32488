//! Managed Kubernetes cluster description.
//!
//! These records are the input of the cluster document generator in
//! `shipwright_iac`. They are built fresh from an asset document for every
//! render and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A managed Kubernetes cluster: name, region, network and worker pools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterSpec {
    pub cluster_name: String,
    pub region: String,
    pub vpc: VpcTopology,
    pub worker_groups: Vec<WorkerGroup>,
}

impl ClusterSpec {
    pub fn new(cluster_name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            region: region.into(),
            ..Self::default()
        }
    }

    pub fn with_vpc(mut self, vpc: impl Into<VpcTopology>) -> Self {
        self.vpc = vpc.into();
        self
    }

    pub fn with_worker_group(mut self, group: WorkerGroup) -> Self {
        self.worker_groups.push(group);
        self
    }
}

/// Network the cluster runs in.
///
/// The default is an existing VPC with every field blank, which is what a
/// cluster without any network configuration renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VpcTopology {
    /// A VPC created alongside the cluster.
    Created(CreatedVpc),
    /// A VPC that already exists and is only referenced.
    Existing(ExistingVpc),
}

impl Default for VpcTopology {
    fn default() -> Self {
        Self::Existing(ExistingVpc::default())
    }
}

impl VpcTopology {
    /// Pick the topology for a cluster where either side may be missing.
    ///
    /// A created VPC takes precedence over an existing one; with neither
    /// present the empty existing VPC is used.
    pub fn select(created: Option<CreatedVpc>, existing: Option<ExistingVpc>) -> Self {
        match (created, existing) {
            (Some(created), _) => Self::Created(created),
            (None, Some(existing)) => Self::Existing(existing),
            (None, None) => Self::default(),
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

impl From<CreatedVpc> for VpcTopology {
    fn from(vpc: CreatedVpc) -> Self {
        Self::Created(vpc)
    }
}

impl From<ExistingVpc> for VpcTopology {
    fn from(vpc: ExistingVpc) -> Self {
        Self::Existing(vpc)
    }
}

/// Topology of a VPC to create.
///
/// Zones and subnets are positional: the caller keeps the n-th zone, public
/// subnet and private subnet in step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedVpc {
    #[serde(rename = "vpc_cidr", skip_serializing_if = "String::is_empty")]
    pub cidr: String,
    #[serde(rename = "zones", skip_serializing_if = "Vec::is_empty")]
    pub availability_zones: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub public_subnets: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub private_subnets: Vec<String>,
}

/// Reference to a VPC that already exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExistingVpc {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vpc_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub public_subnets: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub private_subnets: Vec<String>,
}

/// A fixed-size pool of worker instances.
///
/// `size` is the minimum, maximum and desired capacity at once. It is not
/// range checked here; see `AssetValidator` for the warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerGroup {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "group_size")]
    pub size: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub machine_type: String,
}

impl WorkerGroup {
    pub fn new(name: impl Into<String>, size: i64, machine_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            machine_type: machine_type.into(),
        }
    }
}
