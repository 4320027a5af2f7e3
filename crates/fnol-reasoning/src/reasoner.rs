//! Core Reasoner implementation

use crate::config::ReasoningConfig;
use crate::error::ReasoningError;
use crate::fallback::fallback_reasoning;
use crate::prompt::build_prompt;
use fnol_domain::{ClaimData, GenerationParams, MissingFields, Route, TextGenerator};
use std::sync::Arc;
use tracing::{info, warn};

/// Explains routing decisions with a language model
pub struct Reasoner<L>
where
    L: TextGenerator,
{
    llm_provider: Arc<L>,
    config: ReasoningConfig,
}

impl<L> Reasoner<L>
where
    L: TextGenerator,
{
    /// Create a new Reasoner that owns its provider
    pub fn new(llm_provider: L, config: ReasoningConfig) -> Self {
        Self::from_shared(Arc::new(llm_provider), config)
    }

    /// Create a new Reasoner over a provider shared with other stages
    pub fn from_shared(llm_provider: Arc<L>, config: ReasoningConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ReasoningConfig {
        &self.config
    }

    /// Explain why `claim` was routed to `route`
    ///
    /// Returns the first non-empty trimmed model reply, or the templated
    /// fallback once every attempt has failed.
    pub async fn explain(&self, claim: &ClaimData, missing: &MissingFields, route: Route) -> String {
        let prompt = build_prompt(claim, missing, route, self.config.description_preview_chars);
        let params = GenerationParams::with_temperature(self.config.temperature)
            .max_output_tokens(self.config.max_output_tokens);
        let max_attempts = self.config.max_retries.max(1);

        for attempt in 1..=max_attempts {
            match self.attempt(&prompt, &params).await {
                Ok(reasoning) => {
                    info!(attempt, %route, "Reasoning generated");
                    return reasoning;
                }
                Err(e) => {
                    warn!(attempt, max_attempts, error = %e, "Reasoning generation failed");
                }
            }
        }

        info!(%route, "Using fallback reasoning");
        fallback_reasoning(missing, route)
    }

    async fn attempt(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ReasoningError> {
        let reply = self
            .llm_provider
            .generate(prompt, params)
            .await
            .map_err(|e| ReasoningError::Llm(e.to_string()))?;

        let reasoning = reply.trim();
        if reasoning.is_empty() {
            return Err(ReasoningError::EmptyReply);
        }
        Ok(reasoning.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnol_domain::MandatoryField;
    use fnol_llm::MockProvider;

    fn reasoner(llm: &MockProvider) -> Reasoner<MockProvider> {
        Reasoner::new(llm.clone(), ReasoningConfig::default())
    }

    #[tokio::test]
    async fn test_reply_is_trimmed() {
        let llm = MockProvider::new("\n  Damage of $3,000 is below the fast-track threshold.  \n");
        let text = reasoner(&llm)
            .explain(&ClaimData::default(), &MissingFields::none(), Route::FastTrack)
            .await;
        assert_eq!(text, "Damage of $3,000 is below the fast-track threshold.");
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_call_uses_bounded_output() {
        let llm = MockProvider::new("ok");
        reasoner(&llm)
            .explain(&ClaimData::default(), &MissingFields::none(), Route::StandardProcessing)
            .await;
        let params = llm.last_params().unwrap();
        assert_eq!(params.temperature, 0.2);
        assert_eq!(params.max_output_tokens, Some(200));
    }

    #[tokio::test]
    async fn test_retry_then_success() {
        let llm = MockProvider::new("Routed for specialist review of the injury.");
        llm.push_error("503 Service Unavailable");
        llm.push_response("   ");
        let text = reasoner(&llm)
            .explain(&ClaimData::default(), &MissingFields::none(), Route::SpecialistQueue)
            .await;
        assert_eq!(text, "Routed for specialist review of the injury.");
        assert_eq!(llm.call_count(), 3);
    }

    #[tokio::test]
    async fn test_fallback_after_budget_exhausted() {
        let llm = MockProvider::failing();
        let missing = MissingFields::from_fields([MandatoryField::EstimatedDamage]);
        let text = reasoner(&llm)
            .explain(&ClaimData::default(), &missing, Route::ManualReview)
            .await;
        assert_eq!(
            text,
            "Claim routed to Manual review due to missing mandatory fields: asset_details.estimated_damage."
        );
        assert_eq!(llm.call_count(), 3);
    }

    #[tokio::test]
    async fn test_empty_replies_fall_back() {
        let llm = MockProvider::new("");
        let text = reasoner(&llm)
            .explain(&ClaimData::default(), &MissingFields::none(), Route::InvestigationFlag)
            .await;
        assert_eq!(text, fallback_reasoning(&MissingFields::none(), Route::InvestigationFlag));
    }
}
