//! FNOL field vocabulary and the extracted field map

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};

use core_kernel::Money;
use crate::error::TriageError;

/// A field recognised on a First Notice of Loss document
///
/// Declaration order is significant: it drives the ordering of the
/// extracted map and of the missing-fields report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    PolicyNumber,
    PolicyholderName,
    EffectiveDates,
    IncidentDate,
    IncidentTime,
    IncidentLocation,
    IncidentDescription,
    Claimant,
    ThirdParties,
    ContactDetails,
    AssetType,
    AssetId,
    EstimatedDamage,
    ClaimType,
    Attachments,
    InitialEstimate,
}

impl FieldName {
    /// Every field, in declaration order
    pub const ALL: [FieldName; 16] = [
        FieldName::PolicyNumber,
        FieldName::PolicyholderName,
        FieldName::EffectiveDates,
        FieldName::IncidentDate,
        FieldName::IncidentTime,
        FieldName::IncidentLocation,
        FieldName::IncidentDescription,
        FieldName::Claimant,
        FieldName::ThirdParties,
        FieldName::ContactDetails,
        FieldName::AssetType,
        FieldName::AssetId,
        FieldName::EstimatedDamage,
        FieldName::ClaimType,
        FieldName::Attachments,
        FieldName::InitialEstimate,
    ];

    /// Returns the wire name used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::PolicyNumber => "policyNumber",
            FieldName::PolicyholderName => "policyholderName",
            FieldName::EffectiveDates => "effectiveDates",
            FieldName::IncidentDate => "incidentDate",
            FieldName::IncidentTime => "incidentTime",
            FieldName::IncidentLocation => "incidentLocation",
            FieldName::IncidentDescription => "incidentDescription",
            FieldName::Claimant => "claimant",
            FieldName::ThirdParties => "thirdParties",
            FieldName::ContactDetails => "contactDetails",
            FieldName::AssetType => "assetType",
            FieldName::AssetId => "assetId",
            FieldName::EstimatedDamage => "estimatedDamage",
            FieldName::ClaimType => "claimType",
            FieldName::Attachments => "attachments",
            FieldName::InitialEstimate => "initialEstimate",
        }
    }

    /// Returns true if the field holds a monetary amount
    pub fn is_amount(&self) -> bool {
        matches!(self, FieldName::EstimatedDamage | FieldName::InitialEstimate)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| TriageError::UnknownField(s.to_string()))
    }
}

/// A value captured for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text, already trimmed
    Text(String),
    /// A parsed monetary amount
    Amount(Money),
}

impl FieldValue {
    /// Returns the text, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Amount(_) => None,
        }
    }

    /// Returns the amount, if this is an amount value
    pub fn as_amount(&self) -> Option<&Money> {
        match self {
            FieldValue::Amount(money) => Some(money),
            FieldValue::Text(_) => None,
        }
    }

    /// Returns true for empty or whitespace-only text. Amounts are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Amount(_) => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Amount(money) => write!(f, "{}", money),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Text(text) => serializer.serialize_str(text),
            FieldValue::Amount(money) => {
                let amount = money.amount();
                if amount.fract().is_zero() {
                    if let Some(whole) = amount.to_i64() {
                        return serializer.serialize_i64(whole);
                    }
                }
                match amount.to_f64() {
                    Some(value) => serializer.serialize_f64(value),
                    None => serializer.serialize_str(&amount.to_string()),
                }
            }
        }
    }
}

/// Fields extracted from one document
///
/// Built once by the extractor and read-only afterwards. Iteration and
/// serialization follow `FieldName` declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedFields {
    fields: BTreeMap<FieldName, FieldValue>,
}

impl ExtractedFields {
    /// Creates an empty field map
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: FieldName, value: FieldValue) {
        self.fields.insert(name, value);
    }

    /// Gets the value captured for a field
    pub fn get(&self, name: FieldName) -> Option<&FieldValue> {
        self.fields.get(&name)
    }

    /// Gets a text field's value
    pub fn text(&self, name: FieldName) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Gets an amount field's value
    pub fn amount(&self, name: FieldName) -> Option<&Money> {
        self.get(name).and_then(FieldValue::as_amount)
    }

    /// Returns true if the field was captured
    pub fn contains(&self, name: FieldName) -> bool {
        self.fields.contains_key(&name)
    }

    /// Number of captured fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if nothing was captured
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates captured fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }
}

impl FromIterator<(FieldName, FieldValue)> for ExtractedFields {
    fn from_iter<I: IntoIterator<Item = (FieldName, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
