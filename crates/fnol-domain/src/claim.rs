//! Claim module - the typed shape of a first notice of loss
//!
//! Every field is independently optional. A claim is built once from the
//! model's raw extraction and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Untyped key/value mapping decoded from the language model's reply.
///
/// No invariants: it may be empty, partial, or carry unknown keys.
pub type RawExtraction = serde_json::Value;

/// Policy information group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyInformation {
    /// Policy number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,

    /// Policyholder name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policyholder_name: Option<String>,

    /// Policy effective dates, as written in the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_dates: Option<String>,
}

/// Incident information group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentInformation {
    /// Incident date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Incident time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Incident location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Free-text incident description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Involved parties group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvolvedParties {
    /// Claimant name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimant: Option<String>,

    /// Third parties named in the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_parties: Option<Vec<String>>,

    /// Contact details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<String>,
}

/// Asset details group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetDetails {
    /// Type of asset (vehicle, property, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,

    /// Asset identifier (VIN, address, serial)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,

    /// Estimated damage amount
    #[serde(
        default,
        deserialize_with = "lenient_amount::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_damage: Option<f64>,
}

/// The canonical typed claim
///
/// Absence of a nested group is equivalent to absence of all its children.
/// Serialization omits every absent field, which gives the sparse
/// `extractedFields` map of the response.
///
/// # Examples
///
/// ```
/// use fnol_domain::ClaimData;
///
/// let claim = ClaimData::default();
/// assert_eq!(claim.policy_number(), None);
/// assert_eq!(serde_json::to_string(&claim).unwrap(), "{}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimData {
    /// Policy information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_information: Option<PolicyInformation>,

    /// Incident information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_information: Option<IncidentInformation>,

    /// Involved parties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub involved_parties: Option<InvolvedParties>,

    /// Asset details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_details: Option<AssetDetails>,

    /// Type of claim (auto, property, injury, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_type: Option<String>,

    /// Attachments referenced by the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,

    /// Initial estimate amount
    #[serde(
        default,
        deserialize_with = "lenient_amount::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_estimate: Option<f64>,
}

impl ClaimData {
    /// `policy_information.policy_number`
    pub fn policy_number(&self) -> Option<&str> {
        self.policy_information.as_ref()?.policy_number.as_deref()
    }

    /// `policy_information.policyholder_name`
    pub fn policyholder_name(&self) -> Option<&str> {
        self.policy_information.as_ref()?.policyholder_name.as_deref()
    }

    /// `incident_information.date`
    pub fn incident_date(&self) -> Option<&str> {
        self.incident_information.as_ref()?.date.as_deref()
    }

    /// `incident_information.location`
    pub fn incident_location(&self) -> Option<&str> {
        self.incident_information.as_ref()?.location.as_deref()
    }

    /// `incident_information.description`
    pub fn incident_description(&self) -> Option<&str> {
        self.incident_information.as_ref()?.description.as_deref()
    }

    /// `involved_parties.claimant`
    pub fn claimant(&self) -> Option<&str> {
        self.involved_parties.as_ref()?.claimant.as_deref()
    }

    /// `asset_details.estimated_damage`
    pub fn estimated_damage(&self) -> Option<f64> {
        self.asset_details.as_ref()?.estimated_damage
    }

    /// `claim_type`
    pub fn claim_type(&self) -> Option<&str> {
        self.claim_type.as_deref()
    }
}

/// Amounts arrive as JSON numbers or as numeric strings (`"5000"`,
/// `" 12.5 "`). Anything else, including `"$3,000"`, is a type error.
mod lenient_amount {
    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Amount>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Amount::Number(value)) => Ok(Some(value)),
            Some(Amount::Text(text)) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid amount: {:?}", text))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_on_absent_groups() {
        let claim = ClaimData::default();
        assert_eq!(claim.policy_number(), None);
        assert_eq!(claim.incident_description(), None);
        assert_eq!(claim.claimant(), None);
        assert_eq!(claim.estimated_damage(), None);
    }

    #[test]
    fn test_accessors_on_present_groups() {
        let claim = ClaimData {
            incident_information: Some(IncidentInformation {
                description: Some("Rear-ended at a light".to_string()),
                ..Default::default()
            }),
            asset_details: Some(AssetDetails {
                estimated_damage: Some(0.0),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(claim.incident_description(), Some("Rear-ended at a light"));
        assert_eq!(claim.incident_date(), None);
        assert_eq!(claim.estimated_damage(), Some(0.0));
    }

    #[test]
    fn test_serialization_is_sparse() {
        let claim = ClaimData {
            policy_information: Some(PolicyInformation {
                policy_number: Some("P1".to_string()),
                ..Default::default()
            }),
            involved_parties: Some(InvolvedParties::default()),
            claim_type: Some("Auto".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&claim).unwrap();
        assert_eq!(
            value,
            json!({
                "policy_information": {"policy_number": "P1"},
                "involved_parties": {},
                "claim_type": "Auto"
            })
        );
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let claim: ClaimData = serde_json::from_value(json!({
            "claim_type": "Property",
            "adjuster_notes": "not part of the schema"
        }))
        .unwrap();

        assert_eq!(claim.claim_type(), Some("Property"));
    }

    #[test]
    fn test_deserialize_explicit_nulls() {
        let claim: ClaimData = serde_json::from_value(json!({
            "policy_information": null,
            "asset_details": {"estimated_damage": null, "asset_type": "Vehicle"}
        }))
        .unwrap();

        assert!(claim.policy_information.is_none());
        assert_eq!(claim.estimated_damage(), None);
        assert_eq!(
            claim.asset_details.unwrap().asset_type.as_deref(),
            Some("Vehicle")
        );
    }

    #[test]
    fn test_deserialize_numeric_string_amounts() {
        let claim: ClaimData = serde_json::from_value(json!({
            "asset_details": {"estimated_damage": "5000"},
            "initial_estimate": " 1250.50 "
        }))
        .unwrap();

        assert_eq!(claim.estimated_damage(), Some(5000.0));
        assert_eq!(claim.initial_estimate, Some(1250.5));
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_amounts() {
        for bad in [json!("$3,000"), json!(""), json!("NaN"), json!(true), json!([5000])] {
            let result: Result<ClaimData, _> =
                serde_json::from_value(json!({"asset_details": {"estimated_damage": bad}}));
            assert!(result.is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn test_deserialize_rejects_wrong_types() {
        let result: Result<ClaimData, _> = serde_json::from_value(json!({
            "asset_details": {"estimated_damage": "five thousand"}
        }));
        assert!(result.is_err());

        let result: Result<ClaimData, _> = serde_json::from_value(json!({
            "involved_parties": "Jane Doe"
        }));
        assert!(result.is_err());
    }
}
