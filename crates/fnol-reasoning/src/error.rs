//! Reasoning error types

use thiserror::Error;

/// One failed reasoning attempt
///
/// Never escapes [`Reasoner::explain`](crate::Reasoner::explain); exhausting
/// the retry budget selects the templated fallback instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReasoningError {
    /// The language model call failed
    #[error("LLM error: {0}")]
    Llm(String),

    /// The model answered with nothing but whitespace
    #[error("LLM returned an empty explanation")]
    EmptyReply,
}
