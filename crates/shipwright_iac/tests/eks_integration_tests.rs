//! Golden output tests for the cluster document.
//!
//! The generated text is consumed as terraform input, so these compare whole
//! documents byte for byte.

use shipwright_api::{ClusterSpec, CreatedVpc, ExistingVpc, VpcTopology, WorkerGroup};
use shipwright_iac::{assemble, autoscaling, vpc};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn basic_created_vpc() -> CreatedVpc {
    CreatedVpc {
        cidr: "10.0.0.0/16".to_string(),
        public_subnets: strings(&["10.0.1.0/24", "10.0.2.0/24", "10.0.3.0/24", "10.0.4.0/24"]),
        private_subnets: strings(&[
            "10.128.1.0/24",
            "10.128.2.0/24",
            "10.128.3.0/24",
            "10.128.4.0/24",
        ]),
        availability_zones: strings(&["a", "b", "c", "d"]),
    }
}

fn basic_existing_vpc(vpc_id: &str) -> ExistingVpc {
    ExistingVpc {
        vpc_id: vpc_id.to_string(),
        public_subnets: strings(&["abc123-a", "abc123-b"]),
        private_subnets: strings(&["xyz789-a", "xyz789-b"]),
    }
}

const EMPTY_CREATED_VPC: &str = r#"
variable "vpc_cidr" {
  type    = "string"
  default = ""
}

variable "vpc_public_subnets" {
  default = [
  ]
}

variable "vpc_private_subnets" {
  default = [
  ]
}

variable "vpc_azs" {
  default = [
  ]
}

module "vpc" {
  source  = "terraform-aws-modules/vpc/aws"
  version = "1.37.0"
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

locals {
  "eks_vpc"                 = "${module.vpc.vpc_id}"
  "eks_vpc_public_subnets"  = "${module.vpc.public_subnets}"
  "eks_vpc_private_subnets" = "${module.vpc.private_subnets}"
}
"#;

const BASIC_CREATED_VPC: &str = r#"
variable "vpc_cidr" {
  type    = "string"
  default = "10.0.0.0/16"
}

variable "vpc_public_subnets" {
  default = [
    "10.0.1.0/24",
    "10.0.2.0/24",
    "10.0.3.0/24",
    "10.0.4.0/24",
  ]
}

variable "vpc_private_subnets" {
  default = [
    "10.128.1.0/24",
    "10.128.2.0/24",
    "10.128.3.0/24",
    "10.128.4.0/24",
  ]
}

variable "vpc_azs" {
  default = [
    "a",
    "b",
    "c",
    "d",
  ]
}

module "vpc" {
  source  = "terraform-aws-modules/vpc/aws"
  version = "1.37.0"
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

locals {
  "eks_vpc"                 = "${module.vpc.vpc_id}"
  "eks_vpc_public_subnets"  = "${module.vpc.public_subnets}"
  "eks_vpc_private_subnets" = "${module.vpc.private_subnets}"
}
"#;

const TWO_GROUPS: &str = r#"
locals {
  "worker_group_count" = "2"
}

locals {
  "worker_groups" = [
    {
      name                 = "onegroup"
      asg_min_size         = "3"
      asg_max_size         = "3"
      asg_desired_capacity = "3"
      instance_type        = "m5.large"

      subnets = "${join(",", local.eks_vpc_private_subnets)}"
    },
    {
      name                 = "twogroup"
      asg_min_size         = "1"
      asg_max_size         = "1"
      asg_desired_capacity = "1"
      instance_type        = "m5.xlarge"

      subnets = "${join(",", local.eks_vpc_private_subnets)}"
    },
  ]
}
"#;

const EMPTY_DOCUMENT: &str = r#"
locals {
  "eks_vpc"                 = ""
  "eks_vpc_public_subnets"  = [
  ]
  "eks_vpc_private_subnets" = [
  ]
}

locals {
  "worker_group_count" = "0"
}

locals {
  "worker_groups" = [
  ]
}

provider "aws" {
  version = "~> 1.27"
  region  = ""
}

variable "eks-cluster-name" {
  default = ""
  type    = "string"
}

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

const EXISTING_VPC_DOCUMENT: &str = r#"
locals {
  "eks_vpc"                 = "existing_vpcid"
  "eks_vpc_public_subnets"  = [
    "abc123-a",
    "abc123-b",
  ]
  "eks_vpc_private_subnets" = [
    "xyz789-a",
    "xyz789-b",
  ]
}

locals {
  "worker_group_count" = "1"
}

locals {
  "worker_groups" = [
    {
      name                 = "onegroup"
      asg_min_size         = "3"
      asg_max_size         = "3"
      asg_desired_capacity = "3"
      instance_type        = "m5.large"

      subnets = "${join(",", local.eks_vpc_private_subnets)}"
    },
  ]
}

provider "aws" {
  version = "~> 1.27"
  region  = "us-east-1"
}

variable "eks-cluster-name" {
  default = "existing-vpc-cluster"
  type    = "string"
}

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

const NEW_VPC_TAIL: &str = r#"
locals {
  "worker_group_count" = "2"
}

locals {
  "worker_groups" = [
    {
      name                 = "onegroup"
      asg_min_size         = "3"
      asg_max_size         = "3"
      asg_desired_capacity = "3"
      instance_type        = "m5.large"

      subnets = "${join(",", local.eks_vpc_private_subnets)}"
    },
    {
      name                 = "twogroup"
      asg_min_size         = "2"
      asg_max_size         = "2"
      asg_desired_capacity = "2"
      instance_type        = "m4.large"

      subnets = "${join(",", local.eks_vpc_private_subnets)}"
    },
  ]
}

provider "aws" {
  version = "~> 1.27"
  region  = "us-east-1"
}

variable "eks-cluster-name" {
  default = "new-vpc-cluster"
  type    = "string"
}

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

#[test]
fn test_render_empty_created_vpc() {
    assert_eq!(vpc::render_created(&CreatedVpc::default()), EMPTY_CREATED_VPC);
}

#[test]
fn test_render_basic_created_vpc() {
    assert_eq!(vpc::render_created(&basic_created_vpc()), BASIC_CREATED_VPC);
}

#[test]
fn test_render_basic_existing_vpc() {
    let expected = r#"
locals {
  "eks_vpc"                 = "vpcid"
  "eks_vpc_public_subnets"  = [
    "abc123-a",
    "abc123-b",
  ]
  "eks_vpc_private_subnets" = [
    "xyz789-a",
    "xyz789-b",
  ]
}
"#;
    assert_eq!(vpc::render_existing(&basic_existing_vpc("vpcid")), expected);
}

#[test]
fn test_render_two_worker_groups() {
    let groups = vec![
        WorkerGroup::new("onegroup", 3, "m5.large"),
        WorkerGroup::new("twogroup", 1, "m5.xlarge"),
    ];
    assert_eq!(autoscaling::render(&groups), TWO_GROUPS);
}

#[test]
fn test_assemble_empty_existing_vpc() {
    let spec = ClusterSpec::default().with_vpc(ExistingVpc::default());
    assert_eq!(assemble(&spec).unwrap(), EMPTY_DOCUMENT);
}

#[test]
fn test_assemble_without_any_vpc_matches_empty_existing() {
    let spec = ClusterSpec::default();
    assert_eq!(spec.vpc, VpcTopology::Existing(ExistingVpc::default()));
    assert_eq!(assemble(&spec).unwrap(), EMPTY_DOCUMENT);
}

#[test]
fn test_assemble_existing_vpc() {
    let spec = ClusterSpec::new("existing-vpc-cluster", "us-east-1")
        .with_vpc(basic_existing_vpc("existing_vpcid"))
        .with_worker_group(WorkerGroup::new("onegroup", 3, "m5.large"));

    assert_eq!(assemble(&spec).unwrap(), EXISTING_VPC_DOCUMENT);
}

#[test]
fn test_assemble_new_vpc() {
    let spec = ClusterSpec::new("new-vpc-cluster", "us-east-1")
        .with_vpc(basic_created_vpc())
        .with_worker_group(WorkerGroup::new("onegroup", 3, "m5.large"))
        .with_worker_group(WorkerGroup::new("twogroup", 2, "m4.large"));

    let expected = format!("{BASIC_CREATED_VPC}{NEW_VPC_TAIL}");
    let actual = assemble(&spec).unwrap();
    assert_eq!(actual, expected);
    assert!(actual.contains("module \"vpc\" {\n  source  = \"terraform-aws-modules/vpc/aws\"\n  version = \"1.37.0\"\n"));
}
