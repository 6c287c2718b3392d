//! Griot console — front-end error types.

use griot_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the console.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable or flag is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A domain operation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// An interactive prompt failed, e.g. stderr is not a terminal.
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Rendering output failed.
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),

    /// The operator declined a confirmation.
    #[error("cancelled by operator")]
    Cancelled,
}
