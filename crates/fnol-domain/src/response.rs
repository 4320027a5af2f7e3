//! The externally visible result of processing one claim document

use crate::{ClaimData, MissingFields, Route};
use serde::{Deserialize, Serialize};

/// Processed claim, returned once at the end of the pipeline
///
/// Serializes with camelCase keys: `extractedFields`, `missingFields`,
/// `recommendedRoute`, `reasoning`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedClaimResponse {
    /// The typed claim rendered as a sparse field map
    pub extracted_fields: ClaimData,

    /// Missing mandatory fields, in checklist order
    pub missing_fields: MissingFields,

    /// Routing decision
    pub recommended_route: Route,

    /// Human-readable justification of the route
    pub reasoning: String,
}
