//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during field extraction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractorError {
    /// The language model call failed on every attempt
    #[error("Failed to extract fields after {attempts} attempts: {message}")]
    Llm {
        /// Attempts made
        attempts: u32,
        /// Cause reported by the final attempt
        message: String,
    },

    /// No valid JSON could be recovered from the model's replies
    #[error("LLM returned invalid JSON after {attempts} attempts: {reason}")]
    InvalidJson {
        /// Attempts made
        attempts: u32,
        /// Parse error of the final attempt
        reason: String,
    },

    /// Document text is empty or whitespace
    #[error("Document text is empty")]
    EmptyDocument,

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
