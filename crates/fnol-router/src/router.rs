//! Routing decision tree

use crate::RoutingConfig;
use fnol_domain::{ClaimData, MissingFields, Route};
use tracing::info;

/// Picks exactly one route for a validated claim
///
/// Pure and deterministic: the same claim, missing list, and configuration
/// always give the same route.
#[derive(Debug, Clone)]
pub struct Router {
    config: RoutingConfig,
    keywords: Vec<String>,
}

impl Router {
    /// Create a router over the given configuration
    pub fn new(config: RoutingConfig) -> Self {
        let keywords = config
            .investigation_keywords
            .iter()
            .map(|keyword| keyword.to_lowercase())
            .collect();
        Self { config, keywords }
    }

    /// Create a router with default thresholds and keywords
    pub fn default_config() -> Self {
        Self::new(RoutingConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Route a claim
    ///
    /// A non-empty missing list short-circuits every other rule, so the
    /// keyword, injury, and damage rules only see complete claims.
    pub fn route(&self, claim: &ClaimData, missing: &MissingFields) -> Route {
        if !missing.is_empty() {
            info!(missing = %missing, "Routing to Manual review due to missing fields");
            return Route::ManualReview;
        }

        if let Some(keyword) = self.matched_keyword(claim) {
            info!(keyword, "Routing to Investigation Flag due to keyword");
            return Route::InvestigationFlag;
        }

        if claim
            .claim_type()
            .is_some_and(|claim_type| claim_type.to_lowercase() == "injury")
        {
            info!("Routing to Specialist Queue due to injury claim type");
            return Route::SpecialistQueue;
        }

        if let Some(damage) = claim.estimated_damage() {
            if damage < self.config.fast_track_threshold {
                info!(
                    damage,
                    threshold = self.config.fast_track_threshold,
                    "Routing to Fast-track due to damage below threshold"
                );
                return Route::FastTrack;
            }
        }

        info!("Routing to Standard Processing");
        Route::StandardProcessing
    }

    /// First configured keyword found in the case-folded description
    pub fn matched_keyword(&self, claim: &ClaimData) -> Option<&str> {
        let description = claim.incident_description().unwrap_or_default().to_lowercase();
        self.keywords
            .iter()
            .find(|keyword| description.contains(keyword.as_str()))
            .map(String::as_str)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnol_domain::MandatoryField;
    use fnol_validator::validate;
    use serde_json::json;

    fn claim(description: &str, claim_type: &str, damage: f64) -> (ClaimData, MissingFields) {
        validate(&json!({
            "policy_information": {"policy_number": "P1", "policyholder_name": "Jane Doe"},
            "incident_information": {"date": "2024-01-01", "location": "Main St", "description": description},
            "involved_parties": {"claimant": "Jane Doe"},
            "asset_details": {"estimated_damage": damage},
            "claim_type": claim_type
        }))
    }

    #[test]
    fn test_missing_fields_win() {
        let router = Router::default();
        let (data, _) = claim("staged collision", "Injury", 100.0);
        let missing = MissingFields::from_fields([MandatoryField::ClaimType]);
        assert_eq!(router.route(&data, &missing), Route::ManualReview);
    }

    #[test]
    fn test_keyword_beats_injury_and_damage() {
        let router = Router::default();
        let (data, missing) = claim("Possible FRAUD suspected", "Injury", 100.0);
        assert!(missing.is_empty());
        assert_eq!(router.route(&data, &missing), Route::InvestigationFlag);
        assert_eq!(router.matched_keyword(&data), Some("fraud"));
    }

    #[test]
    fn test_keyword_is_substring_match() {
        let router = Router::default();
        let (data, missing) = claim("Statements were Inconsistently given", "Auto", 40_000.0);
        assert_eq!(router.route(&data, &missing), Route::InvestigationFlag);
    }

    #[test]
    fn test_injury_beats_damage() {
        let router = Router::default();
        let (data, missing) = claim("slipped on ice", "INJURY", 500.0);
        assert_eq!(router.route(&data, &missing), Route::SpecialistQueue);
    }

    #[test]
    fn test_injury_must_match_exactly() {
        let router = Router::default();
        let (data, missing) = claim("slipped on ice", "personal injury", 500.0);
        assert_eq!(router.route(&data, &missing), Route::FastTrack);
    }

    #[test]
    fn test_threshold_boundary() {
        let router = Router::default();

        let (below, missing) = claim("rear-end collision", "Auto", 24_999.99);
        assert_eq!(router.route(&below, &missing), Route::FastTrack);

        let (at, missing) = claim("rear-end collision", "Auto", 25_000.0);
        assert_eq!(router.route(&at, &missing), Route::StandardProcessing);

        let (above, missing) = claim("rear-end collision", "Auto", 90_000.0);
        assert_eq!(router.route(&above, &missing), Route::StandardProcessing);
    }

    #[test]
    fn test_zero_damage_fast_tracks() {
        let router = Router::default();
        let (data, missing) = claim("cracked windshield", "Auto", 0.0);
        assert!(missing.is_empty());
        assert_eq!(router.route(&data, &missing), Route::FastTrack);
    }

    #[test]
    fn test_custom_keywords_and_threshold() {
        let router = Router::new(RoutingConfig {
            fast_track_threshold: 1_000.0,
            investigation_keywords: vec!["Arson".to_string()],
        });

        let (data, missing) = claim("suspected arson at warehouse", "Property", 500.0);
        assert_eq!(router.route(&data, &missing), Route::InvestigationFlag);

        let (data, missing) = claim("staged collision", "Auto", 500.0);
        assert_eq!(router.route(&data, &missing), Route::FastTrack);

        let (data, missing) = claim("hail damage", "Property", 5_000.0);
        assert_eq!(router.route(&data, &missing), Route::StandardProcessing);
    }

    #[test]
    fn test_configured_keyword_case_is_ignored() {
        let router = Router::new(RoutingConfig {
            investigation_keywords: vec!["Fraud".to_string(), "STAGED".to_string()],
            ..RoutingConfig::default()
        });

        let (data, missing) = claim("claimant admitted fraud", "Auto", 500.0);
        assert_eq!(router.route(&data, &missing), Route::InvestigationFlag);
        assert_eq!(router.matched_keyword(&data), Some("fraud"));

        let (data, missing) = claim("looks Staged", "Auto", 500.0);
        assert_eq!(router.matched_keyword(&data), Some("staged"));
        assert_eq!(router.route(&data, &missing), Route::InvestigationFlag);
    }

    #[test]
    fn test_absent_description_routes_without_keyword() {
        let router = Router::default();
        let data = ClaimData {
            claim_type: Some("Auto".to_string()),
            ..ClaimData::default()
        };
        assert_eq!(router.route(&data, &MissingFields::none()), Route::StandardProcessing);
    }
}
