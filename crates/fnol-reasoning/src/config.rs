//! Configuration for the Reasoning Generator

use serde::{Deserialize, Serialize};

/// Configuration for the Reasoning Generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningConfig {
    /// Sampling temperature for reasoning calls
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Attempts before falling back to the template, including the first
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Output-token bound for each call
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Characters of the incident description shown to the model
    #[serde(default = "default_description_preview_chars")]
    pub description_preview_chars: usize,
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_retries() -> u32 {
    3
}

fn default_max_output_tokens() -> u32 {
    200
}

fn default_description_preview_chars() -> usize {
    200
}

impl ReasoningConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_retries == 0 {
            return Err("reasoning max_retries must be greater than 0".to_string());
        }
        if self.max_output_tokens == 0 {
            return Err("reasoning max_output_tokens must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "reasoning temperature {} is outside [0.0, 2.0]",
                self.temperature
            ));
        }
        Ok(())
    }
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            max_retries: default_max_retries(),
            max_output_tokens: default_max_output_tokens(),
            description_preview_chars: default_description_preview_chars(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ReasoningConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_output_tokens, 200);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ReasoningConfig = toml::from_str("max_retries = 1").unwrap();
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.description_preview_chars, 200);
    }

    #[test]
    fn test_invalid_values() {
        let zero_retries = ReasoningConfig {
            max_retries: 0,
            ..ReasoningConfig::default()
        };
        assert!(zero_retries.validate().is_err());

        let hot = ReasoningConfig {
            temperature: -0.5,
            ..ReasoningConfig::default()
        };
        assert!(hot.validate().is_err());
    }
}
