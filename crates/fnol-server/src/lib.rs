//! FNOL HTTP Server
//!
//! Exposes the claims pipeline over HTTP: a service banner, a health check,
//! and a multipart upload endpoint that returns the processed claim.

#![warn(missing_docs)]

pub mod handlers;

use fnol_pipeline::{ClaimsConfig, ConfigError, Pipeline};
use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the claims HTTP server
///
/// Validates configuration, builds the pipeline over the configured model
/// backend, and serves until the process is stopped.
pub async fn start_server(config: ClaimsConfig) -> Result<(), ServerError> {
    config.validate()?;

    info!("Starting FNOL claims server");
    info!("Bind address: {}", config.server.bind_addr());
    info!(
        "Fast-track threshold: {}",
        config.routing.fast_track_threshold
    );
    info!(
        "Investigation keywords: {}",
        config.routing.investigation_keywords.join(", ")
    );

    let pipeline = Pipeline::from_config(&config)?;
    let app = create_router(AppState::new(pipeline), config.server.max_upload_bytes);

    let listener = TcpListener::bind(&config.server.bind_addr()).await?;
    info!("Server listening on {}", config.server.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_start_server_rejects_invalid_config() {
        // Gemini without an API key
        let mut config = ClaimsConfig::default();
        config.llm.api_key = None;
        let result = start_server(config).await;
        assert!(matches!(result, Err(ServerError::Config(_))));
    }
}
