//! Mock provider for deterministic testing

use crate::LlmError;
use async_trait::async_trait;
use fnol_domain::{GenerationParams, TextGenerator};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One scripted outcome
#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Failure(LlmError),
}

#[derive(Debug, Default)]
struct MockState {
    script: VecDeque<Scripted>,
    calls: Vec<(String, GenerationParams)>,
}

/// Mock LLM provider for deterministic testing
///
/// Scripted outcomes are consumed first-in first-out, one per call; once the
/// script is exhausted every call gets the default response. Clones share
/// the script and the call log.
///
/// # Examples
///
/// ```
/// use fnol_llm::MockProvider;
/// use fnol_domain::{GenerationParams, TextGenerator};
///
/// # tokio_test::block_on(async {
/// let provider = MockProvider::new("fallback");
/// provider.push_response("first");
/// provider.push_error("transient failure");
///
/// let params = GenerationParams::with_temperature(0.0);
/// assert_eq!(provider.generate("a", &params).await.unwrap(), "first");
/// assert!(provider.generate("b", &params).await.is_err());
/// assert_eq!(provider.generate("c", &params).await.unwrap(), "fallback");
/// assert_eq!(provider.call_count(), 3);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Option<String>,
    state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: Some(response.into()),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Create a MockProvider whose unscripted calls all fail
    pub fn failing() -> Self {
        Self {
            default_response: None,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Queue a reply for the next unscripted call
    pub fn push_response(&self, response: impl Into<String>) {
        self.lock().script.push_back(Scripted::Reply(response.into()));
    }

    /// Queue a failure for the next unscripted call
    pub fn push_error(&self, message: impl Into<String>) {
        self.lock()
            .script
            .push_back(Scripted::Failure(LlmError::Communication(message.into())));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Reset the call log
    pub fn reset_call_count(&self) {
        self.lock().calls.clear();
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.lock()
            .calls
            .iter()
            .map(|(prompt, _)| prompt.clone())
            .collect()
    }

    /// Parameters of the most recent call
    pub fn last_params(&self) -> Option<GenerationParams> {
        self.lock().calls.last().map(|(_, params)| *params)
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl TextGenerator for MockProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String, LlmError> {
        let mut state = self.lock();
        state.calls.push((prompt.to_string(), *params));

        match state.script.pop_front() {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Failure(error)) => Err(error),
            None => self
                .default_response
                .clone()
                .ok_or_else(|| LlmError::Other("Mock error".to_string())),
        }
    }
}
