//! Comprehensive tests for domain_triage

use proptest::prelude::*;
use rust_decimal_macros::dec;

use domain_triage::{
    process, FieldExtractor, FieldName, InconsistencyKind, RouteDecision, MANDATORY_FIELDS,
};
use test_utils::{
    assert_complete, assert_json_contract, assert_missing, assert_route, fnol_document_strategy,
    free_text_strategy, FnolDocumentBuilder, FnolFixtures,
};

// ============================================================================
// Routing Scenario Tests
// ============================================================================

mod routing_scenarios {
    use super::*;

    #[test]
    fn test_injury_claim_goes_to_specialist_queue() {
        let result = process(&FnolFixtures::injury_claim());

        assert_complete(&result);
        assert_route(&result, RouteDecision::SpecialistQueue);
        assert_eq!(
            result
                .extracted_fields()
                .amount(FieldName::EstimatedDamage)
                .map(|m| m.amount()),
            Some(dec!(12000))
        );
    }

    #[test]
    fn test_small_auto_claim_is_fast_tracked() {
        let result = process(&FnolFixtures::fast_track_auto());

        assert_complete(&result);
        assert!(result.inconsistencies().is_empty());
        assert_route(&result, RouteDecision::FastTrack);
        assert_eq!(result.fired_rule(), "fast_track");
    }

    #[test]
    fn test_staged_description_is_investigated() {
        let result = process(&FnolFixtures::staged_collision());

        assert_route(&result, RouteDecision::InvestigationFlag);
        assert!(result.reasoning().contains("\"staged\""));
    }

    #[test]
    fn test_inflated_estimate_overrides_fast_track() {
        let result = process(&FnolFixtures::inflated_initial_estimate());

        assert_complete(&result);
        assert_route(&result, RouteDecision::ManualReview);
        assert_eq!(result.fired_rule(), "fast_track");
        assert_eq!(result.inconsistencies().len(), 1);
        assert_eq!(result.inconsistencies()[0].kind, InconsistencyKind::EstimateMismatch);
        assert!(result.reasoning().contains("inconsistencies were detected"));
    }

    #[test]
    fn test_override_does_not_hide_fraud_language() {
        let document = FnolDocumentBuilder::new()
            .with_description("Suspected fraud ring")
            .with_estimated_damage("$10,000")
            .with_initial_estimate("$50,000")
            .build();

        let result = process(&document);
        assert_route(&result, RouteDecision::InvestigationFlag);
        assert_eq!(result.inconsistencies().len(), 1);
    }

    #[test]
    fn test_fast_track_boundary() {
        let below = FnolDocumentBuilder::new()
            .with_estimated_damage("$24,999")
            .with_initial_estimate("$24,999")
            .build();
        assert_route(&process(&below), RouteDecision::FastTrack);

        let at = FnolDocumentBuilder::new()
            .with_estimated_damage("$25,000")
            .with_initial_estimate("$25,000")
            .build();
        assert_route(&process(&at), RouteDecision::ManualReview);
    }

    #[test]
    fn test_missing_field_routes_to_manual_review() {
        let document = FnolDocumentBuilder::new()
            .without(FieldName::Attachments)
            .build();

        let result = process(&document);
        assert_missing(&result, &[FieldName::Attachments]);
        assert_route(&result, RouteDecision::ManualReview);
        assert!(result.reasoning().contains("attachments"));
    }

    #[test]
    fn test_missing_fields_precede_injury() {
        let document = FnolDocumentBuilder::new()
            .with_claim_type("Injury")
            .without(FieldName::PolicyNumber)
            .without(FieldName::IncidentTime)
            .build();

        let result = process(&document);
        assert_missing(&result, &[FieldName::PolicyNumber, FieldName::IncidentTime]);
        assert_route(&result, RouteDecision::ManualReview);
    }

    #[test]
    fn test_unparseable_damage_is_reported_missing() {
        let document = FnolDocumentBuilder::new()
            .with_estimated_damage("pending adjuster visit")
            .build();

        let result = process(&document);
        assert!(!result.extracted_fields().contains(FieldName::EstimatedDamage));
        assert_missing(&result, &[FieldName::EstimatedDamage]);
        assert_route(&result, RouteDecision::ManualReview);
    }

    #[test]
    fn test_large_property_claim_defaults_to_manual_review() {
        let result = process(&FnolFixtures::alternate_labels_property());

        assert_complete(&result);
        assert_route(&result, RouteDecision::ManualReview);
        assert_eq!(result.fired_rule(), "fallback");
    }

    #[test]
    fn test_amount_near_decimal_limit_still_routes() {
        let result = process("Estimated Damage: 50000000000000000000000000000\nInitial Estimate: 1");

        assert!(result.inconsistencies().is_empty());
        assert_route(&result, RouteDecision::ManualReview);
        assert_eq!(result.fired_rule(), "missing_fields");
    }

    #[test]
    fn test_huge_damage_with_small_initial_estimate_is_not_flagged() {
        let document = FnolDocumentBuilder::new()
            .with_estimated_damage("$50,000,000,000,000,000,000,000,000,000")
            .with_initial_estimate("$1")
            .build();

        let result = process(&document);
        assert_complete(&result);
        assert!(result.inconsistencies().is_empty());
        assert_route(&result, RouteDecision::ManualReview);
        assert_eq!(result.fired_rule(), "fallback");
    }

    #[test]
    fn test_unrepresentable_damage_is_reported_missing() {
        let document = FnolDocumentBuilder::new()
            .with_estimated_damage(format!("${}", "9".repeat(40)))
            .build();

        let result = process(&document);
        assert_missing(&result, &[FieldName::EstimatedDamage]);
        assert!(result.inconsistencies().is_empty());
        assert_route(&result, RouteDecision::ManualReview);
    }

    #[test]
    fn test_unstructured_text_reports_everything_missing() {
        let result = process(&FnolFixtures::unstructured_email());

        assert_missing(&result, &MANDATORY_FIELDS);
        assert_route(&result, RouteDecision::ManualReview);
    }
}

// ============================================================================
// Extraction Tests
// ============================================================================

mod extraction {
    use super::*;

    #[test]
    fn test_alternate_labels_are_recognised() {
        let fields = FieldExtractor::extract(&FnolFixtures::alternate_labels_property());

        assert_eq!(fields.text(FieldName::PolicyNumber), Some("HO-55-1200"));
        assert_eq!(fields.text(FieldName::PolicyholderName), Some("Priya Natarajan"));
        assert_eq!(fields.text(FieldName::EffectiveDates), Some("2024-02-01 to 2025-01-31"));
        assert_eq!(fields.text(FieldName::IncidentTime), Some("23:10"));
        assert_eq!(fields.text(FieldName::ClaimType), Some("Property"));
        assert_eq!(fields.text(FieldName::AssetId), Some("PARCEL-88-12"));
        assert_eq!(
            fields.amount(FieldName::EstimatedDamage).map(|m| m.amount()),
            Some(dec!(32500))
        );
    }

    #[test]
    fn test_multiline_description_is_joined() {
        let fields = FieldExtractor::extract(&FnolFixtures::alternate_labels_property());

        assert_eq!(
            fields.text(FieldName::IncidentDescription),
            Some("Burst pipe flooded the basement. Water damage to drywall and flooring")
        );
    }

    #[test]
    fn test_alias_priority_within_field() {
        let document = "Loss Type: Theft\nClaim Type: Auto";
        let fields = FieldExtractor::extract(document);

        // Top-to-bottom scan: the earlier line wins even with a lower-priority alias
        assert_eq!(fields.text(FieldName::ClaimType), Some("Theft"));
    }

    #[test]
    fn test_optional_third_parties_extracted() {
        let document = FnolDocumentBuilder::new()
            .with(FieldName::ThirdParties, "Lee Morgan (other driver)")
            .build();

        let result = process(&document);
        assert_eq!(
            result.extracted_fields().text(FieldName::ThirdParties),
            Some("Lee Morgan (other driver)")
        );
        assert_route(&result, RouteDecision::FastTrack);
    }
}

// ============================================================================
// Inconsistency Tests
// ============================================================================

mod inconsistencies {
    use super::*;

    #[test]
    fn test_incident_after_policy_period_forces_manual_review() {
        let document = FnolDocumentBuilder::new()
            .with(FieldName::IncidentDate, "02/03/2025")
            .build();

        let result = process(&document);
        assert_eq!(
            result.inconsistencies()[0].kind,
            InconsistencyKind::IncidentOutsidePolicyPeriod
        );
        assert_route(&result, RouteDecision::ManualReview);
    }

    #[test]
    fn test_injury_with_placeholder_asset_forces_manual_review() {
        let document = FnolDocumentBuilder::new()
            .with_claim_type("Injury")
            .with(FieldName::AssetType, "None")
            .build();

        let result = process(&document);
        assert_eq!(result.fired_rule(), "injury_claim");
        assert_route(&result, RouteDecision::ManualReview);
    }

    #[test]
    fn test_huge_initial_estimate_is_flagged() {
        let document = FnolDocumentBuilder::new()
            .with_estimated_damage("$1")
            .with_initial_estimate("$50,000,000,000,000,000,000,000,000,000")
            .build();

        let result = process(&document);
        assert_eq!(result.inconsistencies().len(), 1);
        assert_eq!(result.inconsistencies()[0].kind, InconsistencyKind::EstimateMismatch);
        assert_eq!(result.fired_rule(), "fast_track");
        assert_route(&result, RouteDecision::ManualReview);
    }

    #[test]
    fn test_zero_damage_with_positive_initial_estimate_is_flagged() {
        let document = FnolDocumentBuilder::new()
            .with_estimated_damage("$0")
            .with_initial_estimate("$5,000")
            .build();

        let result = process(&document);
        assert_complete(&result);
        assert_eq!(result.inconsistencies().len(), 1);
        assert_eq!(result.inconsistencies()[0].kind, InconsistencyKind::EstimateMismatch);
        assert_route(&result, RouteDecision::ManualReview);
    }

    #[test]
    fn test_zero_damage_and_zero_initial_estimate_fast_track() {
        let document = FnolDocumentBuilder::new()
            .with_estimated_damage("$0")
            .with_initial_estimate("$0")
            .build();

        let result = process(&document);
        assert!(result.inconsistencies().is_empty());
        assert_route(&result, RouteDecision::FastTrack);
    }

    #[test]
    fn test_mixed_currencies_are_flagged() {
        let document = FnolDocumentBuilder::new()
            .with_estimated_damage("EUR 8,000")
            .with_initial_estimate("$9,000")
            .build();

        let result = process(&document);
        assert_eq!(result.inconsistencies()[0].kind, InconsistencyKind::CurrencyMismatch);
        assert_route(&result, RouteDecision::ManualReview);
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serialization {
    use super::*;

    #[test]
    fn test_json_has_exactly_four_keys() {
        let result = process(&FnolFixtures::fast_track_auto());
        let json = serde_json::to_value(&result).unwrap();

        assert_json_contract(&json);
        assert_eq!(json["recommendedRoute"], "Fast-track");
    }

    #[test]
    fn test_json_field_values() {
        let result = process(&FnolFixtures::fast_track_auto());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["extractedFields"]["policyNumber"], "POL-2024-00871");
        assert_eq!(json["extractedFields"]["estimatedDamage"], 18000);
        assert!(json["extractedFields"].get("thirdParties").is_none());
        assert_eq!(json["missingFields"], serde_json::json!([]));
    }

    #[test]
    fn test_json_missing_fields_use_wire_names() {
        let result = process("");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["missingFields"][0], "policyNumber");
        assert_eq!(json["missingFields"][14], "initialEstimate");
        assert_eq!(json["recommendedRoute"], "Manual review");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod properties {
    use super::*;

    proptest! {
        #[test]
        fn triage_is_deterministic(text in free_text_strategy()) {
            let first = process(&text);
            let second = process(&text);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn exactly_one_known_route(text in free_text_strategy()) {
            let result = process(&text);
            prop_assert!(RouteDecision::ALL.contains(&result.recommended_route()));
            prop_assert!(!result.reasoning().is_empty());
        }

        #[test]
        fn fraud_language_always_investigated(
            document in fnol_document_strategy(),
            keyword in prop_oneof![Just("fraud"), Just("Inconsistent"), Just("STAGED")],
        ) {
            let document = format!(
                "Incident Description: claimant story is {} per witness\n{}",
                keyword, document
            );
            let result = process(&document);
            prop_assert_eq!(result.recommended_route(), RouteDecision::InvestigationFlag);
        }

        #[test]
        fn missing_fields_without_fraud_go_to_manual_review(
            document in fnol_document_strategy(),
        ) {
            let result = process(&document);
            let description = result
                .extracted_fields()
                .text(FieldName::IncidentDescription)
                .unwrap_or_default()
                .to_lowercase();
            let has_fraud = ["fraud", "inconsistent", "staged"]
                .iter()
                .any(|keyword| description.contains(keyword));

            if !result.missing_fields().is_empty() && !has_fraud {
                prop_assert_eq!(result.recommended_route(), RouteDecision::ManualReview);
            }
        }
    }
}
