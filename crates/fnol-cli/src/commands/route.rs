//! Route command implementation.
//!
//! Replays validation, routing, and templated reasoning over an extraction
//! that was saved earlier. No model is called.

use crate::cli::RouteArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use fnol_domain::{ProcessedClaimResponse, RawExtraction};
use fnol_pipeline::ClaimsConfig;
use fnol_reasoning::fallback_reasoning;
use fnol_router::{Router, RoutingConfig};

/// Execute the route command.
pub async fn execute_route(
    args: RouteArgs,
    config: &ClaimsConfig,
    formatter: &Formatter,
) -> Result<()> {
    config
        .routing
        .validate()
        .map_err(CliError::InvalidInput)?;

    let contents = tokio::fs::read_to_string(&args.extraction).await?;
    let raw: RawExtraction = serde_json::from_str(&contents)?;
    let response = route_extraction(&raw, &config.routing);

    println!("{}", formatter.format_response(&response)?);

    Ok(())
}

/// Validate and route a raw extraction with the given rules.
pub fn route_extraction(raw: &RawExtraction, routing: &RoutingConfig) -> ProcessedClaimResponse {
    let (claim, missing) = fnol_validator::validate(raw);
    let route = Router::new(routing.clone()).route(&claim, &missing);
    let reasoning = fallback_reasoning(&missing, route);

    ProcessedClaimResponse {
        extracted_fields: claim,
        missing_fields: missing,
        recommended_route: route,
        reasoning,
    }
}
