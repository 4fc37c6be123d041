//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating FNOL documents that vary
//! the fields the routing rules look at.

use proptest::prelude::*;

use domain_triage::{FieldName, MANDATORY_FIELDS};

use crate::builders::FnolDocumentBuilder;

/// Strategy for generating claim type labels, with varied casing
pub fn claim_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Auto".to_string()),
        Just("Property".to_string()),
        Just("Theft".to_string()),
        Just("Liability".to_string()),
        Just("Injury".to_string()),
        Just("INJURY".to_string()),
    ]
}

/// Strategy for generating whole-dollar amounts either side of the fast-track threshold
pub fn damage_amount_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![0u32..25_000u32, 25_000u32..200_000u32]
}

/// Strategy for generating incident descriptions, some containing fraud language
pub fn description_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Hail damaged the roof and windshield".to_string()),
        Just("Vehicle skidded on ice into a guardrail".to_string()),
        Just("Kitchen fire spread to the living room".to_string()),
        "[a-z ]{5,40}".prop_map(|text| format!("Adjuster notes {} possible FRAUD", text)),
        Just("Statements from both drivers are inconsistent".to_string()),
        Just("Scene appears staged".to_string()),
    ]
}

/// Strategy for choosing which mandatory fields to drop from a document
pub fn dropped_fields_strategy() -> impl Strategy<Value = Vec<FieldName>> {
    proptest::collection::vec(any::<bool>(), MANDATORY_FIELDS.len()).prop_map(|mask| {
        MANDATORY_FIELDS
            .into_iter()
            .zip(mask)
            .filter(|(_, drop)| *drop)
            .map(|(field, _)| field)
            .collect()
    })
}

/// Strategy for generating labelled FNOL documents
pub fn fnol_document_strategy() -> impl Strategy<Value = String> {
    (
        claim_type_strategy(),
        damage_amount_strategy(),
        damage_amount_strategy(),
        description_strategy(),
        proptest::option::weighted(0.3, dropped_fields_strategy()),
    )
        .prop_map(|(claim_type, damage, initial, description, dropped)| {
            let builder = FnolDocumentBuilder::new()
                .with_claim_type(claim_type)
                .with_estimated_damage(format!("${}", damage))
                .with_initial_estimate(format!("${}", initial))
                .with_description(description);

            dropped
                .unwrap_or_default()
                .into_iter()
                .fold(builder, |builder, field| builder.without(field))
                .build()
        })
}

/// Strategy for generating arbitrary printable text, labelled or not
pub fn free_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,300}",
        fnol_document_strategy(),
    ]
}
