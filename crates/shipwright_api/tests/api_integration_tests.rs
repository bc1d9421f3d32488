//! Integration tests for asset documents.

use std::fs;
use tempfile::tempdir;

use shipwright_api::{
    Asset, AssetKind, AssetReader, AssetValidator, AssetWriter, ApiError, VpcTopology,
};

const DOCUMENT: &str = r#"
v1:
  - inline:
      dest: install.sh
      mode: 493
      description: install script
      contents: |
        #!/bin/sh
        echo {{greeting}}
  - docker:
      dest: images/app.tar
      image: registry.example.com/app:1.2.3
      source: private
  - dockerlayer:
      dest: layer
      image: registry.example.com/app:1.2.3
      layer: sha256:0123
  - github:
      dest: charts
      repo: example/charts
      ref: main
      path: charts/app
  - helm:
      dest: rendered
      helm_opts: ["--namespace", "apps"]
      values:
        replicas: 2
      local:
        chart_root: charts/app
  - terraform:
      dest: tf/module.tf
      inline: |
        resource "null_resource" "noop" {}
  - amazon_elastic_kubernetes_service:
      dest: tf/eks.tf
      when: "{{install_eks}}"
      cluster_name: new-vpc-cluster
      region: us-east-1
      created_vpc:
        vpc_cidr: 10.0.0.0/16
        zones: [a, b]
        public_subnets: [10.0.1.0/24, 10.0.2.0/24]
        private_subnets: [10.128.1.0/24, 10.128.2.0/24]
      autoscaling_groups:
        - name: onegroup
          group_size: 3
          machine_type: m5.large
"#;

/// Every asset kind survives a YAML file read.
#[test]
fn test_read_all_asset_kinds() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ship.yaml");
    fs::write(&path, DOCUMENT).unwrap();

    let assets = AssetReader::read_file(&path).unwrap();
    let kinds: Vec<_> = assets.v1.iter().map(Asset::kind).collect();
    assert_eq!(
        kinds,
        vec![
            AssetKind::Inline,
            AssetKind::Docker,
            AssetKind::DockerLayer,
            AssetKind::GitHub,
            AssetKind::Helm,
            AssetKind::Terraform,
            AssetKind::AmazonElasticKubernetesService,
        ]
    );

    match &assets.v1[0] {
        Asset::Inline(inline) => {
            assert_eq!(inline.shared.effective_mode(), 0o755);
            assert!(inline.contents.starts_with("#!/bin/sh\n"));
        }
        other => panic!("unexpected asset: {other:?}"),
    }

    match &assets.v1[3] {
        Asset::GitHub(github) => assert_eq!(github.git_ref, "main"),
        other => panic!("unexpected asset: {other:?}"),
    }

    let (_, eks) = assets.eks_assets().next().unwrap();
    assert_eq!(eks.shared.when, "{{install_eks}}");
    match &eks.cluster.vpc {
        VpcTopology::Created(vpc) => {
            assert_eq!(vpc.cidr, "10.0.0.0/16");
            assert_eq!(vpc.availability_zones, vec!["a", "b"]);
        }
        other => panic!("unexpected vpc: {other:?}"),
    }

    let result = AssetValidator::validate(&assets);
    assert!(result.valid, "Validation failed: {:?}", result.errors);
    assert!(result.warnings.is_empty(), "Unexpected warnings: {:?}", result.warnings);
}

/// A document written as JSON reads back identically, and so does YAML.
#[test]
fn test_write_and_read_back() {
    let temp = tempdir().unwrap();
    let assets = AssetReader::from_yaml_str(DOCUMENT).unwrap();

    let json_path = temp.path().join("ship.json");
    AssetWriter::write_file(&assets, &json_path).unwrap();
    assert_eq!(AssetReader::read_file(&json_path).unwrap(), assets);

    let yaml_path = temp.path().join("ship.yml");
    AssetWriter::write_file(&assets, &yaml_path).unwrap();
    assert_eq!(AssetReader::read_file(&yaml_path).unwrap(), assets);
}

#[test]
fn test_entry_with_two_kinds_reports_index() {
    let content = r#"
v1:
  - inline:
      dest: a
  - inline:
      dest: b
    web:
      url: https://example.com
"#;

    let err = AssetReader::from_yaml_str(content).unwrap_err();
    assert!(matches!(err, ApiError::MultipleKinds { index: 1, .. }));
    assert!(err.to_string().contains("inline, web"));
}

#[test]
fn test_unknown_extension_is_rejected() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ship.hcl");
    fs::write(&path, "v1 = []").unwrap();

    let err = AssetReader::read_file(&path).unwrap_err();
    assert!(matches!(err, ApiError::UnsupportedFormat(_)));
}
