//! Reasoning prompt construction

use fnol_domain::{ClaimData, MissingFields, Route};
use serde::Serialize;

const SYSTEM_INSTRUCTION: &str = "You are an insurance claims processing expert. \
Provide concise, professional reasoning explanations for claim routing decisions.";

const CLOSING_INSTRUCTION: &str = "Provide a concise explanation that references the \
specific business rules or data points that led to this routing decision.";

/// The subset of a claim the model sees
#[derive(Serialize)]
struct ClaimSummary<'a> {
    policy_number: Option<&'a str>,
    claim_type: Option<&'a str>,
    estimated_damage: Option<f64>,
    incident_date: Option<&'a str>,
    description_preview: Option<String>,
}

impl<'a> ClaimSummary<'a> {
    fn new(claim: &'a ClaimData, preview_chars: usize) -> Self {
        Self {
            policy_number: claim.policy_number(),
            claim_type: claim.claim_type(),
            estimated_damage: claim.estimated_damage(),
            incident_date: claim.incident_date(),
            description_preview: claim
                .incident_description()
                .filter(|description| !description.is_empty())
                .map(|description| preview(description, preview_chars)),
        }
    }
}

/// First `chars` characters followed by an ellipsis
fn preview(text: &str, chars: usize) -> String {
    let mut preview: String = text.chars().take(chars).collect();
    preview.push_str("...");
    preview
}

/// Build the reasoning prompt for one routed claim
pub fn build_prompt(
    claim: &ClaimData,
    missing: &MissingFields,
    route: Route,
    preview_chars: usize,
) -> String {
    let summary = ClaimSummary::new(claim, preview_chars);
    // Serializing a struct of options and strings cannot fail
    let summary = serde_json::to_string_pretty(&summary).unwrap_or_default();

    let missing = if missing.is_empty() {
        "None".to_string()
    } else {
        missing.to_string()
    };

    format!(
        "{SYSTEM_INSTRUCTION}\n\n\
         Generate a short, professional reasoning explanation (2-3 sentences) for why this \
         insurance claim was routed to \"{route}\".\n\n\
         Claim Summary:\n{summary}\n\n\
         Missing Fields: {missing}\n\n\
         {CLOSING_INSTRUCTION}"
    )
}
