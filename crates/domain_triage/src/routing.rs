//! Claim routing
//!
//! Routing runs in two phases, each a pure function:
//!
//! ```text
//! cascade:   fraud language -> missing fields -> injury -> fast-track -> default
//! override:  any inconsistency turns a non-investigation route into manual review
//! ```
//!
//! The cascade stops at the first rule that matches. The override is
//! applied afterwards so that fraud language always keeps the claim on the
//! investigation route.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use crate::error::TriageError;
use crate::field::{ExtractedFields, FieldName};
use crate::inconsistency::InconsistencyFlag;

/// Substrings in an incident description that send a claim to investigation
pub const FRAUD_KEYWORDS: [&str; 3] = ["fraud", "inconsistent", "staged"];

/// Claims with estimated damage strictly below this amount may be fast-tracked
pub const FAST_TRACK_THRESHOLD: Decimal = dec!(25000);

/// Terminal triage category for a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteDecision {
    #[serde(rename = "Investigation Flag")]
    InvestigationFlag,
    #[serde(rename = "Manual review")]
    ManualReview,
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,
    #[serde(rename = "Fast-track")]
    FastTrack,
}

impl RouteDecision {
    /// Every route
    pub const ALL: [RouteDecision; 4] = [
        RouteDecision::InvestigationFlag,
        RouteDecision::ManualReview,
        RouteDecision::SpecialistQueue,
        RouteDecision::FastTrack,
    ];

    /// Returns the route label used in output
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteDecision::InvestigationFlag => "Investigation Flag",
            RouteDecision::ManualReview => "Manual review",
            RouteDecision::SpecialistQueue => "Specialist Queue",
            RouteDecision::FastTrack => "Fast-track",
        }
    }
}

impl fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteDecision {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteDecision::ALL
            .into_iter()
            .find(|route| route.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TriageError::UnknownRoute(s.to_string()))
    }
}

/// The cascade rule that selected a route, with the values that triggered it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FiredRule {
    /// Rule 1: the incident description contains a fraud keyword
    FraudLanguage { keyword: &'static str },
    /// Rule 2: one or more mandatory fields are missing
    MissingFields,
    /// Rule 3: the claim type is injury
    InjuryClaim,
    /// Rule 4: estimated damage is below the fast-track threshold
    FastTrack { damage: Money },
    /// Rule 5: nothing else matched
    Fallback { damage: Option<Money> },
}

impl FiredRule {
    /// Stable identifier for the rule
    pub fn id(&self) -> &'static str {
        match self {
            FiredRule::FraudLanguage { .. } => "fraud_language",
            FiredRule::MissingFields => "missing_fields",
            FiredRule::InjuryClaim => "injury_claim",
            FiredRule::FastTrack { .. } => "fast_track",
            FiredRule::Fallback { .. } => "fallback",
        }
    }
}

/// Result of the rule cascade, before any override
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeOutcome {
    pub decision: RouteDecision,
    pub rule: FiredRule,
}

/// Full routing trace: the cascade outcome and the final decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTrace {
    /// Route after the override phase
    pub decision: RouteDecision,
    /// What the cascade selected
    pub cascade: CascadeOutcome,
    /// True when inconsistencies forced manual review
    pub override_applied: bool,
}

impl RoutingTrace {
    /// Identifier of the cascade rule that fired
    pub fn fired_rule_id(&self) -> &'static str {
        self.cascade.rule.id()
    }
}

/// Deterministic claim router
pub struct RoutingEngine;

impl RoutingEngine {
    /// Routes a claim: cascade first, then the inconsistency override.
    pub fn route(
        fields: &ExtractedFields,
        missing: &[FieldName],
        flags: &[InconsistencyFlag],
    ) -> RoutingTrace {
        let trace = Self::apply_override(Self::cascade(fields, missing), flags);

        tracing::debug!(
            rule = trace.fired_rule_id(),
            cascade = %trace.cascade.decision,
            decision = %trace.decision,
            override_applied = trace.override_applied,
            "Routing complete"
        );
        trace
    }

    /// Evaluates the priority rules; the first match wins.
    pub fn cascade(fields: &ExtractedFields, missing: &[FieldName]) -> CascadeOutcome {
        if let Some(keyword) = fields
            .text(FieldName::IncidentDescription)
            .and_then(find_fraud_keyword)
        {
            return CascadeOutcome {
                decision: RouteDecision::InvestigationFlag,
                rule: FiredRule::FraudLanguage { keyword },
            };
        }

        if !missing.is_empty() {
            return CascadeOutcome {
                decision: RouteDecision::ManualReview,
                rule: FiredRule::MissingFields,
            };
        }

        let is_injury = fields
            .text(FieldName::ClaimType)
            .is_some_and(|claim_type| claim_type.trim().eq_ignore_ascii_case("injury"));
        if is_injury {
            return CascadeOutcome {
                decision: RouteDecision::SpecialistQueue,
                rule: FiredRule::InjuryClaim,
            };
        }

        let damage = fields.amount(FieldName::EstimatedDamage).copied();
        match damage {
            Some(damage) if damage.is_below(FAST_TRACK_THRESHOLD) => CascadeOutcome {
                decision: RouteDecision::FastTrack,
                rule: FiredRule::FastTrack { damage },
            },
            _ => CascadeOutcome {
                decision: RouteDecision::ManualReview,
                rule: FiredRule::Fallback { damage },
            },
        }
    }

    /// Forces manual review when inconsistencies exist, unless the cascade
    /// already chose investigation.
    pub fn apply_override(cascade: CascadeOutcome, flags: &[InconsistencyFlag]) -> RoutingTrace {
        let override_applied =
            !flags.is_empty() && cascade.decision != RouteDecision::InvestigationFlag;

        let decision = if override_applied {
            RouteDecision::ManualReview
        } else {
            cascade.decision
        };

        RoutingTrace {
            decision,
            cascade,
            override_applied,
        }
    }
}

/// Returns the first fraud keyword found in `description`, case-insensitively
fn find_fraud_keyword(description: &str) -> Option<&'static str> {
    let lowered = description.to_lowercase();
    FRAUD_KEYWORDS
        .into_iter()
        .find(|keyword| lowered.contains(keyword))
}
