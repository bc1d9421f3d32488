//! CLI command definitions.
//!
//! Each subcommand maps to one step of the asset pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use thiserror::Error;

use shipwright_api::{AssetReader, Assets};

pub mod eks;
pub mod render;
pub mod validate;

/// shipwright - declarative asset rendering
#[derive(Parser)]
#[command(name = "shipwright")]
#[command(version, about = "shipwright - declarative asset rendering")]
#[command(long_about = r#"
shipwright renders a document of declarative assets (inline files, terraform
modules, managed Kubernetes clusters and more) into an output directory.

COMMANDS:
  render    → Render every asset of a document
  eks       → Print the terraform generated for a cluster asset
  validate  → Check an asset document without rendering it

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  4 - Template error
  5 - Render error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every asset of a document
    Render(render::RenderArgs),

    /// Print the terraform for a managed Kubernetes cluster asset
    Eks(eks::EksArgs),

    /// Validate an asset document
    Validate(validate::ValidateArgs),
}

/// Failures raised by the commands themselves.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Asset validation failed with {0} error(s)")]
    ValidationFailed(usize),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Read an asset document, attaching the path to any failure.
pub fn load_assets(path: &Path) -> Result<Assets> {
    AssetReader::read_file(path)
        .with_context(|| format!("Failed to read asset document {}", path.display()))
}
