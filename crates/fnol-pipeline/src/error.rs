//! Pipeline error types

use fnol_document::DocumentError;
use fnol_extractor::ExtractorError;
use fnol_llm::LlmError;
use thiserror::Error;

/// A request-aborting failure, tagged with the stage that raised it
///
/// Only document parsing and extraction can abort a request. Validation,
/// routing, and reasoning always degrade to a usable response instead.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The document could not be turned into text
    #[error("Document parsing failed: {0}")]
    Document(#[from] DocumentError),

    /// No usable extraction could be obtained
    #[error("Field extraction failed: {0}")]
    Extraction(#[from] ExtractorError),
}

impl PipelineError {
    /// Name of the stage that failed
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Document(_) => "document",
            PipelineError::Extraction(_) => "extraction",
        }
    }

    /// Whether the failure was caused by the submitted document
    ///
    /// Client errors map to HTTP 400; everything else is a server error.
    pub fn is_client_error(&self) -> bool {
        match self {
            PipelineError::Document(_) => true,
            PipelineError::Extraction(e) => matches!(
                e,
                ExtractorError::EmptyDocument | ExtractorError::TextTooLong(_, _)
            ),
        }
    }
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to render TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// An environment override could not be parsed
    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },

    /// The configuration is inconsistent
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// The language-model backend could not be built
    #[error("Provider setup failed: {0}")]
    Provider(#[from] LlmError),
}
