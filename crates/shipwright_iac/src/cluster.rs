//! Cluster document assembly.

use std::fmt::Write;

use tracing::debug;

use shipwright_api::ClusterSpec;

use crate::error::IacResult;
use crate::hcl::quote;
use crate::{autoscaling, vpc};

/// Version constraint of the `aws` provider block.
pub const AWS_PROVIDER_VERSION: &str = "~> 1.27";

const EKS_MODULE: &str = r#"
module "eks" {
  #source = "terraform-aws-modules/eks/aws"
  source  = "laverya/eks/aws"
  version = "1.4.0"

  cluster_name = "${var.eks-cluster-name}"

  subnets = ["${local.eks_vpc_private_subnets}", "${local.eks_vpc_public_subnets}"]

  vpc_id = "${local.eks_vpc}"

  worker_group_count = "${local.worker_group_count}"
  worker_groups      = "${local.worker_groups}"
}
"#;

/// Assemble the full terraform document for a cluster.
///
/// Blocks are separated by one blank line, in this order: VPC, worker
/// groups, provider, cluster name variable, `eks` module. The output is
/// byte-for-byte stable for a given spec.
pub fn assemble(spec: &ClusterSpec) -> IacResult<String> {
    debug!(
        "Assembling cluster document for {:?} ({} worker groups, created vpc: {})",
        spec.cluster_name,
        spec.worker_groups.len(),
        spec.vpc.is_created()
    );

    let mut document = String::new();
    document.write_str(&vpc::render(&spec.vpc))?;
    document.write_str(&autoscaling::render(&spec.worker_groups))?;

    write!(
        document,
        "\nprovider \"aws\" {{\n  version = {}\n  region  = {}\n}}\n",
        quote(AWS_PROVIDER_VERSION),
        quote(&spec.region)
    )?;

    write!(
        document,
        "\nvariable \"eks-cluster-name\" {{\n  default = {}\n  type    = \"string\"\n}}\n",
        quote(&spec.cluster_name)
    )?;

    document.write_str(EKS_MODULE)?;
    Ok(document)
}
