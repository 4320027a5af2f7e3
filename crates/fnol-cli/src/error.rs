//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("{0}")]
    Config(#[from] fnol_pipeline::ConfigError),

    /// The pipeline aborted
    #[error("{0}")]
    Pipeline(#[from] fnol_pipeline::PipelineError),

    /// The HTTP server failed
    #[error("{0}")]
    Server(#[from] fnol_server::ServerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
