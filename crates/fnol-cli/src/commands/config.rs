//! Config command implementation.

use crate::error::Result;
use fnol_pipeline::ClaimsConfig;

/// Execute the config command.
pub async fn execute_config(config: &ClaimsConfig) -> Result<()> {
    print!("{}", render_config(config)?);
    Ok(())
}

/// Effective configuration as TOML, with the API key masked.
pub fn render_config(config: &ClaimsConfig) -> Result<String> {
    Ok(config.redacted().to_toml()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_masks_api_key() {
        let mut config = ClaimsConfig::default();
        config.llm.api_key = Some("secret-key".to_string());

        let rendered = render_config(&config).unwrap();
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("[routing]"));
    }

    #[test]
    fn test_rendered_config_reloads() {
        let mut config = ClaimsConfig::default();
        config.routing.fast_track_threshold = 5000.0;

        let rendered = render_config(&config).unwrap();
        let reloaded = ClaimsConfig::from_toml(&rendered).unwrap();
        assert_eq!(reloaded.routing.fast_track_threshold, 5000.0);
    }
}
