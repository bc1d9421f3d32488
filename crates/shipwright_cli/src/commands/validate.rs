//! Validate command - Validate an asset document.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use shipwright_api::AssetValidator;

use super::{load_assets, CliError};

#[derive(Args)]
pub struct ValidateArgs {
    /// Asset document (.yaml, .yml or .json)
    #[arg(short, long, env = "SHIPWRIGHT_ASSETS")]
    pub assets: PathBuf,
}

pub async fn execute(args: ValidateArgs) -> Result<()> {
    info!("Validating asset document: {}", args.assets.display());

    let assets = load_assets(&args.assets)?;
    println!("📋 Validating {} asset(s)...", assets.len());

    let result = AssetValidator::validate(&assets);
    for warning in &result.warnings {
        println!("   ⚠️  {}", warning);
    }

    if result.valid {
        println!("   ✅ Asset validation passed");
        return Ok(());
    }

    println!("   ❌ Asset validation failed:");
    for error in &result.errors {
        println!("      - {}", error);
    }
    Err(CliError::ValidationFailed(result.errors.len()).into())
}
