//! CLI command definitions and argument parsing.

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// FNOL CLI - Triage first-notice-of-loss claim documents.
#[derive(Debug, Parser)]
#[command(name = "fnol")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "fnol.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format, identical to the HTTP response body
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process a claim document (.pdf or .txt)
    Process(ProcessArgs),

    /// Validate and route an extraction JSON file without calling a model
    Route(RouteArgs),

    /// Print the effective configuration (API key redacted)
    Config,

    /// Start the HTTP server
    Serve,
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// Claim document to process
    pub file: PathBuf,
}

/// Arguments for the route command.
#[derive(Debug, Parser)]
pub struct RouteArgs {
    /// JSON file holding an extraction in the model's output shape
    pub extraction: PathBuf,
}
