//! Deterministic explanations used when the model is unavailable

use fnol_domain::{MissingFields, Route};

/// Templated explanation for a routing decision
///
/// Missing fields take precedence over the route; otherwise the route picks
/// the template.
pub fn fallback_reasoning(missing: &MissingFields, route: Route) -> String {
    if !missing.is_empty() {
        return format!("Claim routed to {route} due to missing mandatory fields: {missing}.");
    }

    match route {
        Route::FastTrack => {
            format!("Claim routed to {route} due to estimated damage below threshold.")
        }
        Route::InvestigationFlag => {
            format!("Claim routed to {route} due to suspicious keywords detected in description.")
        }
        Route::SpecialistQueue => {
            format!("Claim routed to {route} due to injury claim type requiring specialist review.")
        }
        Route::ManualReview | Route::StandardProcessing => {
            format!("Claim routed to {route} as standard processing workflow.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnol_domain::MandatoryField;

    #[test]
    fn test_missing_fields_are_cited() {
        let missing =
            MissingFields::from_fields([MandatoryField::ClaimType, MandatoryField::PolicyNumber]);
        assert_eq!(
            fallback_reasoning(&missing, Route::ManualReview),
            "Claim routed to Manual review due to missing mandatory fields: \
             policy_information.policy_number, claim_type."
        );
    }

    #[test]
    fn test_route_templates() {
        let none = MissingFields::none();
        assert_eq!(
            fallback_reasoning(&none, Route::InvestigationFlag),
            "Claim routed to Investigation Flag due to suspicious keywords detected in description."
        );
        assert_eq!(
            fallback_reasoning(&none, Route::SpecialistQueue),
            "Claim routed to Specialist Queue due to injury claim type requiring specialist review."
        );
        assert_eq!(
            fallback_reasoning(&none, Route::StandardProcessing),
            "Claim routed to Standard Processing as standard processing workflow."
        );
    }

    #[test]
    fn test_every_route_has_a_template() {
        for route in Route::ALL {
            let text = fallback_reasoning(&MissingFields::none(), route);
            assert!(text.starts_with(&format!("Claim routed to {route}")));
            assert!(text.ends_with('.'));
        }
    }
}
