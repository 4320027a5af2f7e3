//! Serve command implementation.

use crate::error::Result;
use fnol_pipeline::ClaimsConfig;
use fnol_server::start_server;

/// Execute the serve command. Runs until the process is stopped.
pub async fn execute_serve(config: ClaimsConfig) -> Result<()> {
    start_server(config).await?;
    Ok(())
}
