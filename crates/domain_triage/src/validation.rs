//! Mandatory field validation
//!
//! A claim is complete only when every field in [`MANDATORY_FIELDS`] was
//! captured with a non-blank value. The report lists gaps in the set's
//! declaration order so that identical documents always produce identical
//! output.

use crate::field::{ExtractedFields, FieldName};

/// Fields that must be present for a claim to be considered complete
pub const MANDATORY_FIELDS: [FieldName; 15] = [
    FieldName::PolicyNumber,
    FieldName::PolicyholderName,
    FieldName::EffectiveDates,
    FieldName::IncidentDate,
    FieldName::IncidentTime,
    FieldName::IncidentLocation,
    FieldName::IncidentDescription,
    FieldName::Claimant,
    FieldName::ContactDetails,
    FieldName::AssetType,
    FieldName::AssetId,
    FieldName::EstimatedDamage,
    FieldName::ClaimType,
    FieldName::Attachments,
    FieldName::InitialEstimate,
];

/// Validator for extracted claim fields
pub struct Validator;

impl Validator {
    /// Lists mandatory fields that are absent or blank, in declaration order
    pub fn find_missing(fields: &ExtractedFields) -> Vec<FieldName> {
        let missing: Vec<FieldName> = MANDATORY_FIELDS
            .into_iter()
            .filter(|name| fields.get(*name).map_or(true, |value| value.is_blank()))
            .collect();

        tracing::debug!(missing = missing.len(), "Mandatory field validation complete");
        missing
    }

    /// Returns true if `field` belongs to the mandatory set
    pub fn is_mandatory(field: FieldName) -> bool {
        MANDATORY_FIELDS.contains(&field)
    }
}
