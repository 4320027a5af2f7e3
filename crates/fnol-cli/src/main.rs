//! FNOL CLI - Command-line interface for claim document triage.

use clap::Parser;
use fnol_cli::commands;
use fnol_cli::{Cli, Command, Formatter};
use fnol_pipeline::{init_tracing, ClaimsConfig};

#[tokio::main]
async fn main() {
    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> fnol_cli::Result<()> {
    let config = ClaimsConfig::load(&cli.config)?;

    // Logs go to stderr; stdout carries command output only
    init_tracing(&config.log_level, !cli.no_color);

    let formatter = Formatter::new(cli.format.map(Into::into).unwrap_or_default(), !cli.no_color);

    match cli.command {
        Command::Process(args) => commands::execute_process(args, &config, &formatter).await?,
        Command::Route(args) => commands::execute_route(args, &config, &formatter).await?,
        Command::Config => commands::execute_config(&config).await?,
        Command::Serve => commands::execute_serve(config).await?,
    }

    Ok(())
}
