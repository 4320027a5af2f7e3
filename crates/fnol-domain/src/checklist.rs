//! Mandatory-field checklist
//!
//! A claim must carry all eight checklist fields to bypass manual review.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One entry of the fixed mandatory-field checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MandatoryField {
    /// `policy_information.policy_number`
    PolicyNumber,
    /// `policy_information.policyholder_name`
    PolicyholderName,
    /// `incident_information.date`
    IncidentDate,
    /// `incident_information.location`
    IncidentLocation,
    /// `incident_information.description`
    IncidentDescription,
    /// `involved_parties.claimant`
    Claimant,
    /// `asset_details.estimated_damage`
    EstimatedDamage,
    /// `claim_type`
    ClaimType,
}

impl MandatoryField {
    /// The checklist, in declaration order
    pub const CHECKLIST: [MandatoryField; 8] = [
        MandatoryField::PolicyNumber,
        MandatoryField::PolicyholderName,
        MandatoryField::IncidentDate,
        MandatoryField::IncidentLocation,
        MandatoryField::IncidentDescription,
        MandatoryField::Claimant,
        MandatoryField::EstimatedDamage,
        MandatoryField::ClaimType,
    ];

    /// Dotted field path
    pub fn path(&self) -> &'static str {
        match self {
            MandatoryField::PolicyNumber => "policy_information.policy_number",
            MandatoryField::PolicyholderName => "policy_information.policyholder_name",
            MandatoryField::IncidentDate => "incident_information.date",
            MandatoryField::IncidentLocation => "incident_information.location",
            MandatoryField::IncidentDescription => "incident_information.description",
            MandatoryField::Claimant => "involved_parties.claimant",
            MandatoryField::EstimatedDamage => "asset_details.estimated_damage",
            MandatoryField::ClaimType => "claim_type",
        }
    }

    /// Look up a checklist entry by its dotted path
    pub fn from_path(path: &str) -> Option<Self> {
        Self::CHECKLIST.into_iter().find(|field| field.path() == path)
    }
}

impl fmt::Display for MandatoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for MandatoryField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

impl<'de> Deserialize<'de> for MandatoryField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let path = String::deserialize(deserializer)?;
        Self::from_path(&path)
            .ok_or_else(|| de::Error::custom(format!("unknown mandatory field: {}", path)))
    }
}

/// Ordered list of missing checklist fields
///
/// Order follows checklist declaration order, not discovery order, and an
/// entry can appear at most once.
///
/// # Examples
///
/// ```
/// use fnol_domain::{MandatoryField, MissingFields};
///
/// let missing = MissingFields::from_fields([
///     MandatoryField::ClaimType,
///     MandatoryField::PolicyNumber,
///     MandatoryField::ClaimType,
/// ]);
/// assert_eq!(
///     missing.paths(),
///     vec!["policy_information.policy_number", "claim_type"]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<MandatoryField>", into = "Vec<MandatoryField>")]
pub struct MissingFields(Vec<MandatoryField>);

impl From<Vec<MandatoryField>> for MissingFields {
    fn from(fields: Vec<MandatoryField>) -> Self {
        Self::from_fields(fields)
    }
}

impl From<MissingFields> for Vec<MandatoryField> {
    fn from(missing: MissingFields) -> Self {
        missing.0
    }
}

impl MissingFields {
    /// An empty list: every checklist field is present
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Build a list from any set of fields, normalizing order and duplicates
    pub fn from_fields(fields: impl IntoIterator<Item = MandatoryField>) -> Self {
        let mut fields: Vec<MandatoryField> = fields.into_iter().collect();
        fields.sort();
        fields.dedup();
        Self(fields)
    }

    /// Whether nothing is missing
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of missing fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether a given checklist field is missing
    pub fn contains(&self, field: MandatoryField) -> bool {
        self.0.contains(&field)
    }

    /// Iterate over the missing fields in checklist order
    pub fn iter(&self) -> impl Iterator<Item = MandatoryField> + '_ {
        self.0.iter().copied()
    }

    /// Dotted paths of the missing fields
    pub fn paths(&self) -> Vec<&'static str> {
        self.0.iter().map(MandatoryField::path).collect()
    }
}

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.paths().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_order_matches_enum_order() {
        let mut sorted = MandatoryField::CHECKLIST;
        sorted.sort();
        assert_eq!(sorted, MandatoryField::CHECKLIST);
    }

    #[test]
    fn test_path_round_trip() {
        for field in MandatoryField::CHECKLIST {
            assert_eq!(MandatoryField::from_path(field.path()), Some(field));
        }
        assert_eq!(MandatoryField::from_path("asset_details.asset_id"), None);
    }

    #[test]
    fn test_missing_fields_serialize_as_paths() {
        let missing = MissingFields::from_fields([
            MandatoryField::EstimatedDamage,
            MandatoryField::Claimant,
        ]);
        let json = serde_json::to_string(&missing).unwrap();
        assert_eq!(
            json,
            r#"["involved_parties.claimant","asset_details.estimated_damage"]"#
        );
    }

    #[test]
    fn test_missing_fields_deserialize_normalizes_order() {
        let missing: MissingFields =
            serde_json::from_str(r#"["claim_type","policy_information.policy_number"]"#).unwrap();
        assert_eq!(
            missing.paths(),
            vec!["policy_information.policy_number", "claim_type"]
        );

        let unknown: Result<MissingFields, _> = serde_json::from_str(r#"["asset_details.asset_id"]"#);
        assert!(unknown.is_err());
    }

    #[test]
    fn test_missing_fields_display() {
        assert_eq!(MissingFields::none().to_string(), "");
        let missing = MissingFields::from_fields([MandatoryField::ClaimType]);
        assert_eq!(missing.to_string(), "claim_type");
        assert_eq!(missing.len(), 1);
        assert!(missing.contains(MandatoryField::ClaimType));
    }
}
