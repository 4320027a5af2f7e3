//! FNOL CLI library.
//!
//! Command-line front end for the claims pipeline: process a document,
//! re-route an already extracted claim offline, inspect the effective
//! configuration, or start the HTTP server.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
