//! Error types for IaC generation.

use thiserror::Error;

/// Result type alias for IaC operations.
pub type IacResult<T> = Result<T, IacError>;

/// Errors that can occur while generating infrastructure code.
#[derive(Error, Debug)]
pub enum IacError {
    #[error("Terraform rendering failed: {0}")]
    Render(#[from] std::fmt::Error),
}
