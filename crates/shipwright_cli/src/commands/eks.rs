//! Eks command - Print the terraform generated for a cluster asset.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::{info, warn};

use shipwright_api::AssetValidator;

use super::{load_assets, CliError};

#[derive(Args)]
pub struct EksArgs {
    /// Asset document (.yaml, .yml or .json)
    #[arg(short, long, env = "SHIPWRIGHT_ASSETS")]
    pub assets: PathBuf,

    /// Which cluster asset to print, counting only cluster assets
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,
}

pub async fn execute(args: EksArgs) -> Result<()> {
    let assets = load_assets(&args.assets)?;

    let (position, asset) = assets.eks_assets().nth(args.index).ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "{} has no cluster asset with index {}",
            args.assets.display(),
            args.index
        ))
    })?;

    info!(
        "Generating terraform for asset {} (cluster {:?})",
        position, asset.cluster.cluster_name
    );
    for warning in AssetValidator::cluster_warnings(&asset.cluster) {
        warn!("{}", warning);
    }

    print!("{}", shipwright_iac::assemble(&asset.cluster)?);
    Ok(())
}
