//! VPC block of the cluster document.
//!
//! Both variants end in the same `locals` block so the rest of the document
//! can refer to `local.eks_vpc`, `local.eks_vpc_public_subnets` and
//! `local.eks_vpc_private_subnets` without knowing where the network came
//! from. A created VPC binds them to outputs of the `vpc` module; an existing
//! VPC binds them to literals.

use shipwright_api::{CreatedVpc, ExistingVpc, VpcTopology};

use crate::hcl::{quote, string_list};

macro_rules! vpc_module_version {
    () => {
        "1.37.0"
    };
}

/// Version of `terraform-aws-modules/vpc/aws` used for created VPCs.
pub const VPC_MODULE_VERSION: &str = vpc_module_version!();

const VPC_MODULE: &str = concat!(
    r#"
module "vpc" {
  source  = "terraform-aws-modules/vpc/aws"
  version = ""#,
    vpc_module_version!(),
    r#""
  name    = "eks-vpc"
  cidr    = "${var.vpc_cidr}"
  azs     = "${var.vpc_azs}"

  private_subnets = "${var.vpc_private_subnets}"
  public_subnets  = "${var.vpc_public_subnets}"

  map_public_ip_on_launch = true
  enable_nat_gateway      = true
  single_nat_gateway      = true

  tags = "${map("kubernetes.io/cluster/${var.eks-cluster-name}", "shared")}"
}
"#
);

const CREATED_VPC_LOCALS: &str = r#"
locals {
  "eks_vpc"                 = "${module.vpc.vpc_id}"
  "eks_vpc_public_subnets"  = "${module.vpc.public_subnets}"
  "eks_vpc_private_subnets" = "${module.vpc.private_subnets}"
}
"#;

/// Render the VPC block for a topology.
pub fn render(vpc: &VpcTopology) -> String {
    match vpc {
        VpcTopology::Created(created) => render_created(created),
        VpcTopology::Existing(existing) => render_existing(existing),
    }
}

/// Variables, `vpc` module and locals for a VPC created with the cluster.
pub fn render_created(vpc: &CreatedVpc) -> String {
    let mut out = String::new();

    out.push_str("\nvariable \"vpc_cidr\" {\n");
    out.push_str("  type    = \"string\"\n");
    out.push_str(&format!("  default = {}\n", quote(&vpc.cidr)));
    out.push_str("}\n");

    for (name, values) in [
        ("vpc_public_subnets", &vpc.public_subnets),
        ("vpc_private_subnets", &vpc.private_subnets),
        ("vpc_azs", &vpc.availability_zones),
    ] {
        out.push_str(&format!("\nvariable \"{name}\" {{\n"));
        out.push_str(&format!("  default = {}\n", string_list(values, "  ")));
        out.push_str("}\n");
    }

    out.push_str(VPC_MODULE);
    out.push_str(CREATED_VPC_LOCALS);
    out
}

/// Locals bound to the identifiers of an existing VPC.
pub fn render_existing(vpc: &ExistingVpc) -> String {
    let mut out = String::from("\nlocals {\n");
    out.push_str(&format!("  \"eks_vpc\"                 = {}\n", quote(&vpc.vpc_id)));
    out.push_str(&format!(
        "  \"eks_vpc_public_subnets\"  = {}\n",
        string_list(&vpc.public_subnets, "  ")
    ));
    out.push_str(&format!(
        "  \"eks_vpc_private_subnets\" = {}\n",
        string_list(&vpc.private_subnets, "  ")
    ));
    out.push_str("}\n");
    out
}
