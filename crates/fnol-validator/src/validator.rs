//! Claim coercion and checklist evaluation

use crate::CoercionError;
use fnol_domain::{ClaimData, MandatoryField, MissingFields, RawExtraction};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Coerce a raw extraction into a typed claim
///
/// Unknown keys are ignored. Any structurally invalid value fails the whole
/// coercion; there is no partial result.
pub fn coerce(raw: &RawExtraction) -> Result<ClaimData, CoercionError> {
    let root = raw.as_object().ok_or_else(|| CoercionError::NotAnObject {
        path: String::new(),
        found: json_type(raw),
    })?;

    // serde would happily read a JSON array into a struct positionally
    for group in GROUPS {
        match root.get(group) {
            None | Some(Value::Null) | Some(Value::Object(_)) => {}
            Some(other) => {
                return Err(CoercionError::NotAnObject {
                    path: group.to_string(),
                    found: json_type(other),
                })
            }
        }
    }

    Ok(serde_json::from_value(raw.clone())?)
}

const GROUPS: [&str; 4] = [
    "policy_information",
    "incident_information",
    "involved_parties",
    "asset_details",
];

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Coerce a raw extraction and compute its missing mandatory fields
///
/// Never fails: a coercion error degrades to `ClaimData::default()`, which
/// then misses every checklist field.
pub fn validate(raw: &RawExtraction) -> (ClaimData, MissingFields) {
    let claim = match coerce(raw) {
        Ok(claim) => claim,
        Err(e) => {
            warn!(error = %e, "Falling back to an empty claim");
            ClaimData::default()
        }
    };

    let missing = missing_fields(&claim);
    if missing.is_empty() {
        info!("All mandatory fields present");
    } else {
        info!(missing = %missing, count = missing.len(), "Mandatory fields missing");
    }

    (claim, missing)
}

/// Evaluate the checklist against a claim, in checklist order
///
/// Strings count as missing when absent or empty. `estimated_damage` is
/// missing only when absent; zero is a value.
pub fn missing_fields(claim: &ClaimData) -> MissingFields {
    let missing: Vec<MandatoryField> = MandatoryField::CHECKLIST
        .into_iter()
        .filter(|field| !is_present(claim, *field))
        .collect();

    debug!(
        checked = MandatoryField::CHECKLIST.len(),
        missing = missing.len(),
        "Checklist evaluated"
    );
    MissingFields::from_fields(missing)
}

fn is_present(claim: &ClaimData, field: MandatoryField) -> bool {
    let text = match field {
        MandatoryField::PolicyNumber => claim.policy_number(),
        MandatoryField::PolicyholderName => claim.policyholder_name(),
        MandatoryField::IncidentDate => claim.incident_date(),
        MandatoryField::IncidentLocation => claim.incident_location(),
        MandatoryField::IncidentDescription => claim.incident_description(),
        MandatoryField::Claimant => claim.claimant(),
        MandatoryField::ClaimType => claim.claim_type(),
        MandatoryField::EstimatedDamage => return claim.estimated_damage().is_some(),
    };
    text.is_some_and(|value| !value.is_empty())
}
