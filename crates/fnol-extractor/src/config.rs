//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Sampling temperature for extraction calls
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Attempts per document, including the first
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Maximum input text length (characters)
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

fn default_temperature() -> f32 {
    0.0
}

fn default_max_retries() -> u32 {
    3
}

fn default_max_text_length() -> usize {
    100_000
}

impl ExtractorConfig {
    /// Check attempt budget, length cap, and temperature range
    pub fn validate(&self) -> Result<(), String> {
        if self.max_retries == 0 {
            return Err("extraction max_retries must be greater than 0".to_string());
        }
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "extraction temperature {} is outside [0.0, 2.0]",
                self.temperature
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            max_retries: default_max_retries(),
            max_text_length: default_max_text_length(),
        }
    }
}
