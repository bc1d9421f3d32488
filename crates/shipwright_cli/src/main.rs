//! shipwright CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Validation failure
//! - 4: Template error
//! - 5: Render error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shipwright_api::ApiError;
use shipwright_iac::IacError;
use shipwright_render::RenderError;

mod commands;

use commands::{Cli, CliError, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
    pub const RENDER_ERROR: u8 = 5;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "shipwright=info,warn"
    };

    // Logging may already be initialized
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .try_init();

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(args).await,
        Commands::Eks(args) => commands::eks::execute(args).await,
        Commands::Validate(args) => commands::validate::execute(args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(err) = cause.downcast_ref::<CliError>() {
            return match err {
                CliError::ValidationFailed(_) => ExitCodes::VALIDATION_FAILURE,
                CliError::InvalidArgument(_) => ExitCodes::INVALID_ARGS,
            };
        }
        if let Some(err) = cause.downcast_ref::<RenderError>() {
            return categorize_render_error(err.root());
        }
        if let Some(err) = cause.downcast_ref::<ApiError>() {
            return match err {
                ApiError::UnsupportedFormat(_) | ApiError::Io(_) => ExitCodes::INVALID_ARGS,
                _ => ExitCodes::VALIDATION_FAILURE,
            };
        }
        if cause.downcast_ref::<IacError>().is_some() {
            return ExitCodes::RENDER_ERROR;
        }
    }
    ExitCodes::GENERAL_ERROR
}

fn categorize_render_error(e: &RenderError) -> u8 {
    match e {
        RenderError::MissingVariable(_) | RenderError::InvalidWhen { .. } => {
            ExitCodes::TEMPLATE_ERROR
        }
        RenderError::InvalidConfig(_)
        | RenderError::Yaml(_)
        | RenderError::Json(_)
        | RenderError::Toml(_) => ExitCodes::INVALID_ARGS,
        RenderError::InvalidDestination { .. } | RenderError::InvalidAsset(_) => {
            ExitCodes::VALIDATION_FAILURE
        }
        _ => ExitCodes::RENDER_ERROR,
    }
}
