//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the claim pipeline and
//! infrastructure. Implementations live in other crates.

use async_trait::async_trait;

/// Sampling parameters for one text-generation call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Sampling temperature
    pub temperature: f32,

    /// Upper bound on generated tokens, if the caller wants one
    pub max_output_tokens: Option<u32>,
}

impl GenerationParams {
    /// Parameters with the given temperature and no output bound
    pub fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature,
            max_output_tokens: None,
        }
    }

    /// Set an output-token bound
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}

/// Text-in, text-out language model capability
///
/// Implemented by the infrastructure layer (fnol-llm). Output is neither
/// idempotent nor deterministic across calls, and a call may fail
/// transiently; callers own their retry policy.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Error type for generation failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Generate a completion for `prompt`
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, Self::Error>;
}
