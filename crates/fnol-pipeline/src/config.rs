//! Process-wide configuration
//!
//! Loaded once at startup from a TOML file plus environment overrides, then
//! split into one config value per component.

use crate::error::ConfigError;
use fnol_extractor::ExtractorConfig;
use fnol_llm::{ProviderConfig, ProviderKind};
use fnol_reasoning::ReasoningConfig;
use fnol_router::RoutingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted upload, in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl ServerConfig {
    /// Get the full bind address (host:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Complete configuration for the claims pipeline
///
/// Every field has a default, so an empty file is a valid configuration.
///
/// # Examples
///
/// ```
/// use fnol_pipeline::ClaimsConfig;
///
/// let config = ClaimsConfig::from_toml("[routing]\nfast_track_threshold = 10000.0").unwrap();
/// assert_eq!(config.routing.fast_track_threshold, 10000.0);
/// assert_eq!(config.extraction.max_retries, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimsConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Language-model backend
    #[serde(default)]
    pub llm: ProviderConfig,

    /// Field extraction
    #[serde(default)]
    pub extraction: ExtractorConfig,

    /// Reasoning generation
    #[serde(default)]
    pub reasoning: ReasoningConfig,

    /// Routing rules
    #[serde(default)]
    pub routing: RoutingConfig,

    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClaimsConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            llm: ProviderConfig::default(),
            extraction: ExtractorConfig::default(),
            reasoning: ReasoningConfig::default(),
            routing: RoutingConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl ClaimsConfig {
    /// Load configuration from `path` and the process environment
    ///
    /// A missing file yields defaults. Environment overrides are applied
    /// last; the result is not validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            debug!(path = %path.display(), "Loading configuration file");
            Self::from_toml(&std::fs::read_to_string(path)?)?
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Self::default()
        };

        config.apply_env_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Copy with the API key masked, for display
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.llm.api_key.is_some() {
            config.llm.api_key = Some("********".to_string());
        }
        config
    }

    /// Apply overrides from an environment lookup
    ///
    /// Recognized variables: `GEMINI_API_KEY`, `FNOL_LLM_PROVIDER`,
    /// `FNOL_LLM_MODEL`, `FNOL_FAST_TRACK_THRESHOLD`,
    /// `FNOL_INVESTIGATION_KEYWORDS` (comma-separated), `FNOL_MAX_RETRIES`
    /// (both extraction and reasoning), and `FNOL_LOG_LEVEL`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GEMINI_API_KEY") {
            self.llm.api_key = Some(key);
        }

        if let Some(value) = lookup("FNOL_LLM_PROVIDER") {
            self.llm.provider = ProviderKind::parse(&value).ok_or(ConfigError::InvalidEnv {
                var: "FNOL_LLM_PROVIDER",
                value,
            })?;
        }

        if let Some(model) = lookup("FNOL_LLM_MODEL") {
            self.llm.model = Some(model);
        }

        if let Some(value) = lookup("FNOL_FAST_TRACK_THRESHOLD") {
            self.routing.fast_track_threshold =
                value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    var: "FNOL_FAST_TRACK_THRESHOLD",
                    value,
                })?;
        }

        if let Some(value) = lookup("FNOL_INVESTIGATION_KEYWORDS") {
            self.routing.investigation_keywords = value
                .split(',')
                .map(str::trim)
                .filter(|keyword| !keyword.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(value) = lookup("FNOL_MAX_RETRIES") {
            let retries: u32 = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: "FNOL_MAX_RETRIES",
                value,
            })?;
            self.extraction.max_retries = retries;
            self.reasoning.max_retries = retries;
        }

        if let Some(level) = lookup("FNOL_LOG_LEVEL") {
            self.log_level = level;
        }

        Ok(())
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extraction.validate().map_err(ConfigError::Invalid)?;
        self.reasoning.validate().map_err(ConfigError::Invalid)?;
        self.routing.validate().map_err(ConfigError::Invalid)?;

        if self.llm.provider == ProviderKind::Gemini
            && self
                .llm
                .api_key
                .as_deref()
                .map_or(true, |key| key.trim().is_empty())
        {
            return Err(ConfigError::Invalid(
                "GEMINI_API_KEY (or llm.api_key) is required for the gemini provider".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "log_level '{}' is not one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
