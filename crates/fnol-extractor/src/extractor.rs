//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::{parse_reply, recover_json};
use crate::prompt::PromptBuilder;
use fnol_domain::{GenerationParams, RawExtraction, TextGenerator};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The Extractor converts claim document text into a raw field map
pub struct Extractor<L>
where
    L: TextGenerator,
{
    llm_provider: Arc<L>,
    config: ExtractorConfig,
}

impl<L> Extractor<L>
where
    L: TextGenerator,
{
    /// Create a new Extractor that owns its provider
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self::from_shared(Arc::new(llm_provider), config)
    }

    /// Create a new Extractor over a provider shared with other stages
    pub fn from_shared(llm_provider: Arc<L>, config: ExtractorConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a raw field map from document text
    ///
    /// Makes up to `max_retries` model calls with an unchanged prompt. Only
    /// the final attempt's raw reply gets the brace-recovery treatment.
    ///
    /// # Errors
    ///
    /// - `EmptyDocument` / `TextTooLong` before any model call
    /// - `Llm` when the final attempt's call itself failed
    /// - `InvalidJson` when the final reply held no recoverable object
    pub async fn extract(&self, text: &str) -> Result<RawExtraction, ExtractorError> {
        if text.trim().is_empty() {
            return Err(ExtractorError::EmptyDocument);
        }

        let length = text.chars().count();
        if length > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(
                length,
                self.config.max_text_length,
            ));
        }

        let prompt = PromptBuilder::new(text).build();
        let params = GenerationParams::with_temperature(self.config.temperature);
        let max_attempts = self.config.max_retries.max(1);

        info!(text_length = length, max_attempts, "Starting field extraction");
        debug!("Prompt length: {} chars", prompt.len());

        for attempt in 1..=max_attempts {
            let is_final = attempt == max_attempts;

            let reply = match self.llm_provider.generate(&prompt, &params).await {
                Ok(reply) => reply,
                Err(e) if is_final => {
                    warn!(attempt, error = %e, "LLM call failed on final attempt");
                    return Err(ExtractorError::Llm {
                        attempts: attempt,
                        message: e.to_string(),
                    });
                }
                Err(e) => {
                    warn!(attempt, error = %e, "LLM call failed, retrying");
                    continue;
                }
            };

            debug!(attempt, reply_length = reply.len(), "Received LLM reply");

            match parse_reply(&reply) {
                Ok(raw) => {
                    info!(attempt, "Extracted claim fields");
                    return Ok(raw);
                }
                Err(e) if is_final => {
                    if let Some(raw) = recover_json(&reply) {
                        info!(attempt, "Recovered JSON object from final reply");
                        return Ok(raw);
                    }
                    warn!(attempt, error = %e, "No JSON recoverable from final reply");
                    return Err(ExtractorError::InvalidJson {
                        attempts: attempt,
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Reply was not valid JSON, retrying");
                }
            }
        }

        // max_attempts >= 1 and the final attempt always returns
        Err(ExtractorError::Config(
            "extraction loop ended without a final attempt".to_string(),
        ))
    }
}
