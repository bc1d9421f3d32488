//! Render command - Render every asset of a document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use shipwright_api::AssetValidator;
use shipwright_render::{AssetDispatcher, ConfigValues, RenderContext};

use super::{load_assets, CliError};

#[derive(Args)]
pub struct RenderArgs {
    /// Asset document (.yaml, .yml or .json)
    #[arg(short, long, env = "SHIPWRIGHT_ASSETS")]
    pub assets: PathBuf,

    /// Directory the assets are rendered into
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Config values file (.yaml, .yml, .json or .toml)
    #[arg(short, long, env = "SHIPWRIGHT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Config value override, may be repeated
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
}

pub async fn execute(args: RenderArgs) -> Result<()> {
    info!("Rendering assets from {}", args.assets.display());

    let assets = load_assets(&args.assets)?;

    let validation = AssetValidator::validate(&assets);
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    if !validation.valid {
        for error in &validation.errors {
            eprintln!("   ❌ {}", error);
        }
        return Err(CliError::ValidationFailed(validation.errors.len()).into());
    }

    let mut values = match &args.config {
        Some(path) => ConfigValues::from_file(path)
            .with_context(|| format!("Failed to load config values from {}", path.display()))?,
        None => ConfigValues::new(),
    };
    for assignment in &args.set {
        values.set_assignment(assignment)?;
    }

    let ctx = RenderContext::new(&args.out).with_values(values);
    let report = AssetDispatcher::default().execute(&assets, &ctx).await?;

    for asset in &report.rendered {
        println!("   ✅ {} ({}) → {}", asset.index, asset.kind, asset.dest);
    }
    for asset in &report.skipped {
        println!("   ⏭️  {} ({}) skipped", asset.index, asset.kind);
    }

    println!();
    println!(
        "✅ Rendered {} asset(s) into {}",
        report.rendered.len(),
        args.out.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    use shipwright_render::DEFAULT_EKS_DEST;

    const DOCUMENT: &str = r#"
v1:
  - amazon_elastic_kubernetes_service:
      when: "{{install_eks}}"
      mode: 0600
      cluster_name: demo
      region: us-east-1
      existing_vpc:
        vpc_id: vpc-123
      autoscaling_groups:
        - name: workers
          group_size: 2
          machine_type: m5.large
"#;

    #[tokio::test]
    async fn test_render_writes_cluster_terraform() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("ship.yaml");
        fs::write(&assets, DOCUMENT).unwrap();
        let out = dir.path().join("out");

        execute(RenderArgs {
            assets,
            out: out.clone(),
            config: None,
            set: vec!["install_eks=true".to_string()],
        })
        .await
        .unwrap();

        let written = fs::read_to_string(out.join(DEFAULT_EKS_DEST)).unwrap();
        assert!(written.contains("module \"eks\""));
        assert!(written.contains("\"vpc-123\""));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(out.join(DEFAULT_EKS_DEST)).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[tokio::test]
    async fn test_render_refuses_invalid_document() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("ship.yaml");
        fs::write(&assets, "v1:\n  - inline:\n      dest: /etc/passwd\n      contents: x\n").unwrap();
        let out = dir.path().join("out");

        let err = execute(RenderArgs {
            assets,
            out: out.clone(),
            config: None,
            set: Vec::new(),
        })
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ValidationFailed(_))
        ));
        assert!(!out.exists());
    }
}
