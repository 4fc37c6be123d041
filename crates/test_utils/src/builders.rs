//! Test Data Builders
//!
//! Provides a builder for FNOL documents with sensible defaults. Tests set
//! only the fields they care about; every other mandatory field is filled
//! with a value that triggers no routing rule and no inconsistency.

use std::collections::BTreeMap;

use domain_triage::{FieldExtractor, FieldName};

/// Builder for rendering a labelled FNOL text document
#[derive(Debug, Clone)]
pub struct FnolDocumentBuilder {
    values: BTreeMap<FieldName, String>,
    header: Vec<String>,
    footer: Vec<String>,
}

impl Default for FnolDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FnolDocumentBuilder {
    /// Creates a builder for a complete, fast-track eligible auto claim
    pub fn new() -> Self {
        let values = [
            (FieldName::PolicyNumber, "POL-2024-00871"),
            (FieldName::PolicyholderName, "Dana Reyes"),
            (FieldName::EffectiveDates, "01/01/2024 - 12/31/2024"),
            (FieldName::IncidentDate, "03/15/2024"),
            (FieldName::IncidentTime, "08:45 AM"),
            (FieldName::IncidentLocation, "Main St & 5th Ave, Springfield"),
            (
                FieldName::IncidentDescription,
                "Rear-ended while stopped at a traffic light",
            ),
            (FieldName::Claimant, "Dana Reyes"),
            (FieldName::ContactDetails, "dana.reyes@example.com, 555-0100"),
            (FieldName::AssetType, "Sedan"),
            (FieldName::AssetId, "1HGCM82633A004352"),
            (FieldName::EstimatedDamage, "$18,000"),
            (FieldName::ClaimType, "Auto"),
            (FieldName::Attachments, "Photos, police report"),
            (FieldName::InitialEstimate, "$15,000"),
        ]
        .into_iter()
        .map(|(field, value)| (field, value.to_string()))
        .collect();

        Self {
            values,
            header: vec!["FIRST NOTICE OF LOSS".to_string()],
            footer: Vec::new(),
        }
    }

    /// Sets a field's raw text
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// Removes a field from the document
    pub fn without(mut self, field: FieldName) -> Self {
        self.values.remove(&field);
        self
    }

    /// Sets the claim type
    pub fn with_claim_type(self, claim_type: impl Into<String>) -> Self {
        self.with(FieldName::ClaimType, claim_type)
    }

    /// Sets the incident description
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with(FieldName::IncidentDescription, description)
    }

    /// Sets the estimated damage text
    pub fn with_estimated_damage(self, damage: impl Into<String>) -> Self {
        self.with(FieldName::EstimatedDamage, damage)
    }

    /// Sets the initial estimate text
    pub fn with_initial_estimate(self, estimate: impl Into<String>) -> Self {
        self.with(FieldName::InitialEstimate, estimate)
    }

    /// Appends a free-form line after the labelled fields
    pub fn with_footer_line(mut self, line: impl Into<String>) -> Self {
        self.footer.push(line.into());
        self
    }

    /// Renders the document, one `Label: value` line per field using each
    /// field's primary alias
    pub fn build(self) -> String {
        let mut lines = self.header;
        lines.extend(self.values.iter().map(|(field, value)| {
            let label = FieldExtractor::aliases(*field).first().copied().unwrap_or(field.as_str());
            format!("{}: {}", label, value)
        }));
        lines.extend(self.footer);
        lines.join("\n")
    }
}
