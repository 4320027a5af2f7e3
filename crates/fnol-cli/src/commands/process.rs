//! Process command implementation.

use crate::cli::ProcessArgs;
use crate::error::Result;
use crate::output::Formatter;
use fnol_pipeline::{ClaimsConfig, Pipeline};

/// Execute the process command.
pub async fn execute_process(
    args: ProcessArgs,
    config: &ClaimsConfig,
    formatter: &Formatter,
) -> Result<()> {
    config.validate()?;

    let pipeline = Pipeline::from_config(config)?;
    let response = pipeline.process_path(&args.file).await?;

    println!("{}", formatter.format_response(&response)?);

    Ok(())
}
