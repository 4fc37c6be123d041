//! Cross-field sanity checks
//!
//! Each check compares two extracted values and raises a named flag when
//! their relationship is implausible. A check whose inputs are absent or
//! unreadable is simply not triggered; reporting absent data is the
//! validator's job.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::{parse_date, CoveragePeriod, MoneyError};
use crate::field::{ExtractedFields, FieldName};

/// An initial estimate above this multiple of the estimated damage is suspicious
pub const ESTIMATE_MISMATCH_RATIO: Decimal = dec!(2);

/// Asset type values that stand in for "no asset"
const ASSET_PLACEHOLDERS: [&str; 4] = ["n/a", "na", "none", "-"];

/// Kind of inconsistency detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InconsistencyKind {
    /// Initial estimate far exceeds the estimated damage
    EstimateMismatch,
    /// The two estimates are stated in different currencies
    CurrencyMismatch,
    /// Injury claim whose asset type is a placeholder
    InjuryWithoutAsset,
    /// Incident date outside the policy's effective dates
    IncidentOutsidePolicyPeriod,
}

impl InconsistencyKind {
    /// Returns the flag name
    pub fn as_str(&self) -> &'static str {
        match self {
            InconsistencyKind::EstimateMismatch => "estimate_mismatch",
            InconsistencyKind::CurrencyMismatch => "currency_mismatch",
            InconsistencyKind::InjuryWithoutAsset => "injury_without_asset",
            InconsistencyKind::IncidentOutsidePolicyPeriod => "incident_outside_policy_period",
        }
    }
}

impl fmt::Display for InconsistencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raised inconsistency with its human-readable note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InconsistencyFlag {
    pub kind: InconsistencyKind,
    pub note: String,
}

impl InconsistencyFlag {
    fn new(kind: InconsistencyKind, note: impl Into<String>) -> Self {
        Self {
            kind,
            note: note.into(),
        }
    }
}

/// Applies cross-field checks to extracted fields
pub struct InconsistencyChecker;

impl InconsistencyChecker {
    /// Runs every check and returns the flags raised, in check order.
    ///
    /// Each check raises at most one flag.
    pub fn check(fields: &ExtractedFields) -> Vec<InconsistencyFlag> {
        let flags: Vec<InconsistencyFlag> = [
            Self::check_estimates(fields),
            Self::check_injury_asset(fields),
            Self::check_policy_period(fields),
        ]
        .into_iter()
        .flatten()
        .collect();

        for flag in &flags {
            tracing::debug!(flag = %flag.kind, note = %flag.note, "Inconsistency raised");
        }
        flags
    }

    fn check_estimates(fields: &ExtractedFields) -> Option<InconsistencyFlag> {
        let initial = fields.amount(FieldName::InitialEstimate)?;
        let damage = fields.amount(FieldName::EstimatedDamage)?;

        match initial.exceeds_ratio_of(damage, ESTIMATE_MISMATCH_RATIO) {
            Ok(true) => Some(InconsistencyFlag::new(
                InconsistencyKind::EstimateMismatch,
                format!(
                    "initial estimate {} is more than {}x the estimated damage {}",
                    initial, ESTIMATE_MISMATCH_RATIO, damage
                ),
            )),
            Ok(false) => None,
            Err(MoneyError::CurrencyMismatch(initial_currency, damage_currency)) => {
                Some(InconsistencyFlag::new(
                    InconsistencyKind::CurrencyMismatch,
                    format!(
                        "initial estimate is in {} but estimated damage is in {}",
                        initial_currency, damage_currency
                    ),
                ))
            }
            Err(_) => None,
        }
    }

    fn check_injury_asset(fields: &ExtractedFields) -> Option<InconsistencyFlag> {
        let claim_type = fields.text(FieldName::ClaimType)?;
        let asset_type = fields.text(FieldName::AssetType)?;

        let is_injury = claim_type.trim().eq_ignore_ascii_case("injury");
        let is_placeholder = ASSET_PLACEHOLDERS
            .iter()
            .any(|placeholder| asset_type.trim().eq_ignore_ascii_case(placeholder));

        (is_injury && is_placeholder).then(|| {
            InconsistencyFlag::new(
                InconsistencyKind::InjuryWithoutAsset,
                format!("injury claim lists placeholder asset type \"{}\"", asset_type),
            )
        })
    }

    fn check_policy_period(fields: &ExtractedFields) -> Option<InconsistencyFlag> {
        let incident = parse_date(fields.text(FieldName::IncidentDate)?).ok()?;
        let period = CoveragePeriod::parse(fields.text(FieldName::EffectiveDates)?).ok()?;

        (!period.contains(incident)).then(|| {
            InconsistencyFlag::new(
                InconsistencyKind::IncidentOutsidePolicyPeriod,
                format!(
                    "incident date {} falls outside the policy period {} to {}",
                    incident, period.start, period.end
                ),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;
    use core_kernel::{Currency, Money};

    fn amount(value: Decimal, currency: Currency) -> FieldValue {
        FieldValue::Amount(Money::new(value, currency))
    }

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[test]
    fn test_estimate_mismatch_raised_above_ratio() {
        let fields: ExtractedFields = vec![
            (FieldName::EstimatedDamage, amount(dec!(10000), Currency::USD)),
            (FieldName::InitialEstimate, amount(dec!(50000), Currency::USD)),
        ]
        .into_iter()
        .collect();

        let flags = InconsistencyChecker::check(&fields);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].kind, InconsistencyKind::EstimateMismatch);
        assert!(flags[0].note.contains("$50,000.00"));
        assert!(flags[0].note.contains("$10,000.00"));
    }

    #[test]
    fn test_estimate_at_exact_ratio_not_raised() {
        let fields: ExtractedFields = vec![
            (FieldName::EstimatedDamage, amount(dec!(10000), Currency::USD)),
            (FieldName::InitialEstimate, amount(dec!(20000), Currency::USD)),
        ]
        .into_iter()
        .collect();

        assert!(InconsistencyChecker::check(&fields).is_empty());
    }

    #[test]
    fn test_currency_mismatch_replaces_ratio_check() {
        let fields: ExtractedFields = vec![
            (FieldName::EstimatedDamage, amount(dec!(100), Currency::EUR)),
            (FieldName::InitialEstimate, amount(dec!(900), Currency::USD)),
        ]
        .into_iter()
        .collect();

        let flags = InconsistencyChecker::check(&fields);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].kind, InconsistencyKind::CurrencyMismatch);
    }

    #[test]
    fn test_injury_with_placeholder_asset() {
        let fields: ExtractedFields = vec![
            (FieldName::ClaimType, text("Injury")),
            (FieldName::AssetType, text("N/A")),
        ]
        .into_iter()
        .collect();

        let flags = InconsistencyChecker::check(&fields);
        assert_eq!(flags[0].kind, InconsistencyKind::InjuryWithoutAsset);
    }

    #[test]
    fn test_injury_with_absent_asset_is_skipped() {
        let fields: ExtractedFields = vec![(FieldName::ClaimType, text("Injury"))]
            .into_iter()
            .collect();

        assert!(InconsistencyChecker::check(&fields).is_empty());
    }

    #[test]
    fn test_incident_outside_policy_period() {
        let fields: ExtractedFields = vec![
            (FieldName::EffectiveDates, text("2024-01-01 to 2024-12-31")),
            (FieldName::IncidentDate, text("2025-02-10")),
        ]
        .into_iter()
        .collect();

        let flags = InconsistencyChecker::check(&fields);
        assert_eq!(flags[0].kind, InconsistencyKind::IncidentOutsidePolicyPeriod);
        assert!(flags[0].note.contains("2025-02-10"));
    }

    #[test]
    fn test_unreadable_dates_are_skipped() {
        let fields: ExtractedFields = vec![
            (FieldName::EffectiveDates, text("annual")),
            (FieldName::IncidentDate, text("last night")),
        ]
        .into_iter()
        .collect();

        assert!(InconsistencyChecker::check(&fields).is_empty());
    }

    #[test]
    fn test_flag_names() {
        assert_eq!(InconsistencyKind::EstimateMismatch.to_string(), "estimate_mismatch");
    }
}
