//! End-to-end claim processing

use crate::config::ClaimsConfig;
use crate::error::{ConfigError, PipelineError};
use fnol_document::{parse_bytes, parse_path, DocumentError, DocumentKind};
use fnol_domain::{ProcessedClaimResponse, TextGenerator};
use fnol_extractor::Extractor;
use fnol_llm::Provider;
use fnol_reasoning::Reasoner;
use fnol_router::Router;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, info_span, Instrument, Span};
use uuid::Uuid;

/// Runs extraction, validation, routing, and reasoning for one document
///
/// Stages run strictly in order. The pipeline holds no per-request state,
/// so one instance can serve concurrent requests.
pub struct Pipeline<L>
where
    L: TextGenerator,
{
    extractor: Extractor<L>,
    router: Router,
    reasoner: Reasoner<L>,
}

impl<L> Pipeline<L>
where
    L: TextGenerator,
{
    /// Build a pipeline whose extractor and reasoner share one provider
    pub fn new(llm_provider: L, config: &ClaimsConfig) -> Self {
        let llm_provider = Arc::new(llm_provider);
        Self {
            extractor: Extractor::from_shared(Arc::clone(&llm_provider), config.extraction.clone()),
            router: Router::new(config.routing.clone()),
            reasoner: Reasoner::from_shared(llm_provider, config.reasoning.clone()),
        }
    }

    /// Assemble a pipeline from separately configured stages
    pub fn from_parts(extractor: Extractor<L>, router: Router, reasoner: Reasoner<L>) -> Self {
        Self {
            extractor,
            router,
            reasoner,
        }
    }

    /// Process document text that has already been extracted from a file
    pub async fn process_text(&self, text: &str) -> Result<ProcessedClaimResponse, PipelineError> {
        self.run(text).instrument(request_span()).await
    }

    /// Process an uploaded document held in memory
    ///
    /// The file name only selects the parser; nothing touches the disk.
    pub async fn process_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ProcessedClaimResponse, PipelineError> {
        self.parse_upload_and_run(file_name, bytes)
            .instrument(request_span())
            .await
    }

    /// Process a document on disk
    pub async fn process_path(&self, path: &Path) -> Result<ProcessedClaimResponse, PipelineError> {
        self.parse_file_and_run(path)
            .instrument(request_span())
            .await
    }

    async fn parse_upload_and_run(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ProcessedClaimResponse, PipelineError> {
        let kind = DocumentKind::from_file_name(file_name)?;
        info!(file_name, bytes = bytes.len(), "Parsing uploaded document");

        // PDF text extraction is CPU-bound
        let text = tokio::task::spawn_blocking(move || parse_bytes(kind, &bytes))
            .await
            .map_err(|e| DocumentError::Pdf(format!("Parser task failed: {}", e)))??;

        self.run(&text).await
    }

    async fn parse_file_and_run(&self, path: &Path) -> Result<ProcessedClaimResponse, PipelineError> {
        let owned = path.to_path_buf();
        let text = tokio::task::spawn_blocking(move || parse_path(&owned))
            .await
            .map_err(|e| DocumentError::Pdf(format!("Parser task failed: {}", e)))??;

        self.run(&text).await
    }

    async fn run(&self, text: &str) -> Result<ProcessedClaimResponse, PipelineError> {
        info!(text_length = text.len(), "Processing claim");

        let raw = self.extractor.extract(text).await?;
        let (claim, missing) = fnol_validator::validate(&raw);
        let route = self.router.route(&claim, &missing);
        let reasoning = self.reasoner.explain(&claim, &missing, route).await;

        info!(%route, missing = missing.len(), "Claim processed");

        Ok(ProcessedClaimResponse {
            extracted_fields: claim,
            missing_fields: missing,
            recommended_route: route,
            reasoning,
        })
    }
}

impl Pipeline<Provider> {
    /// Build a pipeline over the backend named in the configuration
    pub fn from_config(config: &ClaimsConfig) -> Result<Self, ConfigError> {
        let provider = Provider::from_config(&config.llm)?;
        info!(provider = provider.name(), model = config.llm.model_name(), "Language model configured");
        Ok(Self::new(provider, config))
    }
}

fn request_span() -> Span {
    let request_id = Uuid::now_v7();
    info_span!("process_claim", %request_id)
}
