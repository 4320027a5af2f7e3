//! Routing configuration

use serde::{Deserialize, Serialize};

/// Thresholds and keywords the router consults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Damage strictly below this amount is fast-tracked
    #[serde(default = "default_fast_track_threshold")]
    pub fast_track_threshold: f64,

    /// Description substrings that trigger investigation, checked in order
    ///
    /// Matching ignores case on both sides: `"Fraud"` and `"fraud"` are the
    /// same keyword.
    #[serde(default = "default_investigation_keywords")]
    pub investigation_keywords: Vec<String>,
}

fn default_fast_track_threshold() -> f64 {
    25_000.0
}

fn default_investigation_keywords() -> Vec<String> {
    vec![
        "fraud".to_string(),
        "inconsistent".to_string(),
        "staged".to_string(),
    ]
}

impl RoutingConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.fast_track_threshold.is_finite() || self.fast_track_threshold < 0.0 {
            return Err(format!(
                "fast_track_threshold must be a non-negative number, got {}",
                self.fast_track_threshold
            ));
        }
        if self
            .investigation_keywords
            .iter()
            .any(|keyword| keyword.trim().is_empty())
        {
            return Err("investigation_keywords must not contain empty entries".to_string());
        }
        Ok(())
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            fast_track_threshold: default_fast_track_threshold(),
            investigation_keywords: default_investigation_keywords(),
        }
    }
}
