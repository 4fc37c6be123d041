//! Triage pipeline
//!
//! ```text
//! text -> extract -> { validate, check } -> route -> explain -> TriageResult
//! ```

use serde::Serialize;

use crate::extractor::FieldExtractor;
use crate::field::{ExtractedFields, FieldName};
use crate::inconsistency::{InconsistencyChecker, InconsistencyFlag};
use crate::reasoning::ReasoningGenerator;
use crate::routing::{RouteDecision, RoutingEngine};
use crate::validation::Validator;

/// Outcome of triaging one document
///
/// Serializes to exactly four keys: `extractedFields`, `missingFields`,
/// `recommendedRoute` and `reasoning`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    extracted_fields: ExtractedFields,
    missing_fields: Vec<FieldName>,
    recommended_route: RouteDecision,
    reasoning: String,
    #[serde(skip)]
    inconsistencies: Vec<InconsistencyFlag>,
    #[serde(skip)]
    fired_rule: &'static str,
}

impl TriageResult {
    /// Fields extracted from the document
    pub fn extracted_fields(&self) -> &ExtractedFields {
        &self.extracted_fields
    }

    /// Mandatory fields that were absent or blank
    pub fn missing_fields(&self) -> &[FieldName] {
        &self.missing_fields
    }

    /// The selected route
    pub fn recommended_route(&self) -> RouteDecision {
        self.recommended_route
    }

    /// One-sentence justification for the route
    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    /// Inconsistencies raised while checking the fields
    pub fn inconsistencies(&self) -> &[InconsistencyFlag] {
        &self.inconsistencies
    }

    /// Identifier of the cascade rule that fired
    pub fn fired_rule(&self) -> &'static str {
        self.fired_rule
    }
}

/// Triages a plain-text FNOL document.
///
/// Never fails: sparse or unrecognisable text degrades to manual review.
///
/// # Example
///
/// ```rust
/// use domain_triage::{process, RouteDecision};
///
/// let result = process("");
/// assert_eq!(result.recommended_route(), RouteDecision::ManualReview);
/// ```
pub fn process(text: &str) -> TriageResult {
    let span = tracing::debug_span!("triage", bytes = text.len());
    let _guard = span.enter();

    let extracted_fields = FieldExtractor::extract(text);
    let missing_fields = Validator::find_missing(&extracted_fields);
    let inconsistencies = InconsistencyChecker::check(&extracted_fields);

    let trace = RoutingEngine::route(&extracted_fields, &missing_fields, &inconsistencies);
    let reasoning = ReasoningGenerator::explain(&trace, &missing_fields, &inconsistencies);

    tracing::info!(
        route = %trace.decision,
        rule = trace.fired_rule_id(),
        missing = missing_fields.len(),
        inconsistencies = inconsistencies.len(),
        "Claim triaged"
    );

    TriageResult {
        extracted_fields,
        missing_fields,
        recommended_route: trace.decision,
        reasoning,
        inconsistencies,
        fired_rule: trace.fired_rule_id(),
    }
}
