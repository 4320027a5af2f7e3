//! FNOL claims server
//!
//! Starts the HTTP server for claim document processing.

use fnol_pipeline::{init_tracing, ClaimsConfig};
use fnol_server::{start_server, ServerError};
use std::env;
use std::process;

const DEFAULT_CONFIG_PATH: &str = "fnol.toml";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 2 && args[1] == "--config" {
        args[2].clone()
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        DEFAULT_CONFIG_PATH.to_string()
    };

    let config = ClaimsConfig::load(&config_path)?;
    init_tracing(&config.log_level, true);

    start_server(config).await
}

fn print_help() {
    println!("FNOL Server - Insurance Claims Processing");
    println!();
    println!("USAGE:");
    println!("    fnol-server [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file (default: fnol.toml)");
    println!("    --help             Print this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    GEMINI_API_KEY                 API key for the Gemini provider");
    println!("    FNOL_LLM_PROVIDER              gemini | ollama | mock");
    println!("    FNOL_LLM_MODEL                 Model name");
    println!("    FNOL_FAST_TRACK_THRESHOLD      Damage below this amount is fast-tracked");
    println!("    FNOL_INVESTIGATION_KEYWORDS    Comma-separated investigation keywords");
    println!("    FNOL_MAX_RETRIES               Attempts per model call site");
    println!("    FNOL_LOG_LEVEL                 Log level when RUST_LOG is unset");
    println!();
    println!("ENDPOINTS:");
    println!("    GET  /                 Service information");
    println!("    GET  /health           Health check");
    println!("    POST /process-claim    Process a claim document (multipart field 'file')");
    println!();
}
