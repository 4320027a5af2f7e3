//! Route module - the five routing destinations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Routing destination for a processed claim
///
/// Computed once per request, never persisted, never revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Expedited processing for low-damage claims
    #[serde(rename = "Fast-track")]
    FastTrack,

    /// One or more mandatory fields are missing
    #[serde(rename = "Manual review")]
    ManualReview,

    /// Suspicious wording found in the incident description
    #[serde(rename = "Investigation Flag")]
    InvestigationFlag,

    /// Injury claims handled by a specialist team
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,

    /// Everything else
    #[serde(rename = "Standard Processing")]
    StandardProcessing,
}

impl Route {
    /// All routes, in decision-tree order of the rule that produces them
    pub const ALL: [Route; 5] = [
        Route::ManualReview,
        Route::InvestigationFlag,
        Route::SpecialistQueue,
        Route::FastTrack,
        Route::StandardProcessing,
    ];

    /// Get the route label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::FastTrack => "Fast-track",
            Route::ManualReview => "Manual review",
            Route::InvestigationFlag => "Investigation Flag",
            Route::SpecialistQueue => "Specialist Queue",
            Route::StandardProcessing => "Standard Processing",
        }
    }

    /// Parse a route from its label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|route| route.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid route: {}", s))
    }
}
