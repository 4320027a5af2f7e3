//! FNOL LLM Provider Layer
//!
//! Pluggable implementations of the `TextGenerator` trait from `fnol-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Scripted, deterministic replies for testing
//! - `GeminiProvider`: Google Generative Language API
//! - `OllamaProvider`: Local Ollama API integration
//! - `Provider`: Configuration-selected wrapper over the three
//!
//! Providers make exactly one request per `generate` call. Retry policy
//! belongs to the callers.
//!
//! # Examples
//!
//! ```
//! use fnol_llm::MockProvider;
//! use fnol_domain::{GenerationParams, TextGenerator};
//!
//! # tokio_test::block_on(async {
//! let provider = MockProvider::new("Hello from LLM!");
//! let params = GenerationParams::with_temperature(0.0);
//! let result = provider.generate("test prompt", &params).await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # });
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod gemini;
pub mod mock;
pub mod ollama;

use async_trait::async_trait;
use fnol_domain::{GenerationParams, TextGenerator};
use thiserror::Error;

pub use config::{ProviderConfig, ProviderKind};
pub use gemini::GeminiProvider;
pub use mock::MockProvider;
pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Provider could not be constructed from its configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// A `TextGenerator` chosen at runtime from configuration
#[derive(Debug, Clone)]
pub enum Provider {
    /// Google Gemini
    Gemini(GeminiProvider),
    /// Local Ollama
    Ollama(OllamaProvider),
    /// Scripted mock
    Mock(MockProvider),
}

impl Provider {
    /// Build the provider described by `config`
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Configuration` if a Gemini provider is requested
    /// without an API key, or if the HTTP client cannot be built.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, LlmError> {
        match config.provider {
            ProviderKind::Gemini => {
                let api_key = config
                    .api_key
                    .as_deref()
                    .filter(|key| !key.trim().is_empty())
                    .ok_or_else(|| {
                        LlmError::Configuration("Gemini provider requires an API key".to_string())
                    })?;
                let endpoint = config
                    .endpoint
                    .as_deref()
                    .unwrap_or(gemini::DEFAULT_ENDPOINT);
                Ok(Provider::Gemini(GeminiProvider::with_endpoint(
                    endpoint,
                    api_key,
                    config.model_name(),
                    config.timeout(),
                )?))
            }
            ProviderKind::Ollama => {
                let endpoint = config
                    .endpoint
                    .as_deref()
                    .unwrap_or(ollama::DEFAULT_ENDPOINT);
                Ok(Provider::Ollama(OllamaProvider::with_timeout(
                    endpoint,
                    config.model_name(),
                    config.timeout(),
                )?))
            }
            ProviderKind::Mock => Ok(Provider::Mock(MockProvider::new("{}"))),
        }
    }

    /// Short provider name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini(_) => "gemini",
            Provider::Ollama(_) => "ollama",
            Provider::Mock(_) => "mock",
        }
    }
}

#[async_trait]
impl TextGenerator for Provider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String, LlmError> {
        match self {
            Provider::Gemini(provider) => provider.generate(prompt, params).await,
            Provider::Ollama(provider) => provider.generate(prompt, params).await,
            Provider::Mock(provider) => provider.generate(prompt, params).await,
        }
    }
}
