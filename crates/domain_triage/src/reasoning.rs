//! Human-readable routing justification
//!
//! Narrates a [`RoutingTrace`] as a single sentence. No routing decisions
//! are made here.

use core_kernel::Money;
use crate::field::FieldName;
use crate::inconsistency::InconsistencyFlag;
use crate::routing::{FiredRule, RouteDecision, RoutingTrace, FAST_TRACK_THRESHOLD};

/// Renders routing traces into explanations
pub struct ReasoningGenerator;

impl ReasoningGenerator {
    /// Explains why `trace` ended on its decision, citing the values involved.
    pub fn explain(
        trace: &RoutingTrace,
        missing: &[FieldName],
        flags: &[InconsistencyFlag],
    ) -> String {
        let reason = Self::rule_clause(&trace.cascade.rule, missing);

        if trace.override_applied {
            return format!(
                "{}, but inconsistencies were detected ({}); routed to {}.",
                reason,
                join_notes(flags),
                trace.decision
            );
        }

        if trace.decision == RouteDecision::InvestigationFlag && !flags.is_empty() {
            return format!(
                "{}, which takes precedence over detected inconsistencies ({}); routed to {}.",
                reason,
                join_notes(flags),
                trace.decision
            );
        }

        format!("{}; routed to {}.", reason, trace.decision)
    }

    fn rule_clause(rule: &FiredRule, missing: &[FieldName]) -> String {
        match rule {
            FiredRule::FraudLanguage { keyword } => format!(
                "Incident description contains potential fraud indicator \"{}\"",
                keyword
            ),
            FiredRule::MissingFields => format!(
                "Mandatory fields are missing ({})",
                missing
                    .iter()
                    .map(FieldName::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            FiredRule::InjuryClaim => {
                "Claim type is injury and requires specialist handling".to_string()
            }
            FiredRule::FastTrack { damage } => format!(
                "Estimated damage {} is below the {} fast-track threshold",
                damage,
                threshold_in(damage)
            ),
            FiredRule::Fallback { damage: Some(damage) } => format!(
                "Estimated damage {} is not below the {} fast-track threshold",
                damage,
                threshold_in(damage)
            ),
            FiredRule::Fallback { damage: None } => {
                "Estimated damage is unavailable, so the claim cannot be fast-tracked".to_string()
            }
        }
    }
}

fn threshold_in(damage: &Money) -> Money {
    Money::new(FAST_TRACK_THRESHOLD, damage.currency())
}

fn join_notes(flags: &[InconsistencyFlag]) -> String {
    flags
        .iter()
        .map(|flag| flag.note.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
