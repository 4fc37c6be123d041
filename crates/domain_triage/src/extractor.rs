//! Labeled-alias field extraction
//!
//! FNOL documents are semi-structured: most facts appear on lines of the
//! form `Label: value`, but submitters use many spellings for the same
//! label. Each field therefore owns an ordered alias list. Scanning runs
//! top to bottom and, within a line, tries aliases in list order; the
//! first non-blank capture wins.
//!
//! Extraction is best-effort. Amounts that cannot be parsed are dropped
//! and unknown lines are ignored, so this stage never fails.

use once_cell::sync::Lazy;
use regex::Regex;

use core_kernel::Money;
use crate::field::{ExtractedFields, FieldName, FieldValue};

/// Label aliases per field, highest priority first
const FIELD_ALIASES: [(FieldName, &[&str]); 16] = [
    (FieldName::PolicyNumber, &["Policy Number", "Policy No", "Policy #", "Policy"]),
    (
        FieldName::PolicyholderName,
        &["Policyholder Name", "Insured Name", "Policyholder", "Insured"],
    ),
    (
        FieldName::EffectiveDates,
        &["Effective Dates", "Effective Date", "Policy Period", "Coverage Period"],
    ),
    (
        FieldName::IncidentDate,
        &["Incident Date", "Loss Date", "Date of Loss", "Date of Incident"],
    ),
    (
        FieldName::IncidentTime,
        &["Incident Time", "Loss Time", "Time of Loss", "Time of Incident"],
    ),
    (
        FieldName::IncidentLocation,
        &["Incident Location", "Loss Location", "Location of Loss", "Location"],
    ),
    (
        FieldName::IncidentDescription,
        &["Incident Description", "Loss Description", "Description of Loss", "Description"],
    ),
    (FieldName::Claimant, &["Claimant Name", "Claimant"]),
    (FieldName::ThirdParties, &["Third Parties", "Third Party"]),
    (FieldName::ContactDetails, &["Contact Details", "Contact", "Phone", "Email"]),
    (FieldName::AssetType, &["Asset Type", "Vehicle Type", "Property Type"]),
    (
        FieldName::AssetId,
        &["Asset ID", "VIN", "Registration Number", "Registration No", "Registration"],
    ),
    (
        FieldName::EstimatedDamage,
        &["Estimated Damage", "Damage Estimate", "Estimated Loss"],
    ),
    (FieldName::ClaimType, &["Claim Type", "Type of Claim", "Loss Type"]),
    (FieldName::Attachments, &["Attachments", "Attachment", "Documents"]),
    (FieldName::InitialEstimate, &["Initial Estimate", "Preliminary Estimate"]),
];

/// Fields whose value may continue onto following lines
const MULTILINE_FIELDS: [FieldName; 1] = [FieldName::IncidentDescription];

/// Compiled matchers for one field
struct FieldPattern {
    field: FieldName,
    aliases: Vec<Regex>,
}

static FIELD_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    FIELD_ALIASES
        .iter()
        .map(|(field, aliases)| FieldPattern {
            field: *field,
            aliases: aliases.iter().map(|alias| label_regex(alias)).collect(),
        })
        .collect()
});

/// Any line that opens with a short `Label:` prefix
static LABEL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\s\-\*•]*[A-Za-z][A-Za-z0-9 /#()'&]{0,40}\s*:").expect("valid label regex")
});

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

fn label_regex(alias: &str) -> Regex {
    let label = alias
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    Regex::new(&format!(r"(?i)^[\s\-\*•]*{}\s*[:\-#=]\s*(?P<value>.*)$", label))
        .expect("alias labels are escaped")
}

/// Extracts structured fields from FNOL plain text
pub struct FieldExtractor;

impl FieldExtractor {
    /// Returns the label aliases recognised for `field`, highest priority first
    pub fn aliases(field: FieldName) -> &'static [&'static str] {
        FIELD_ALIASES
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, aliases)| *aliases)
            .unwrap_or(&[])
    }

    /// Scans `text` and returns every field it can recognise.
    ///
    /// # Arguments
    ///
    /// * `text` - Plain document text; any line ending convention is accepted
    ///
    /// # Returns
    ///
    /// The extracted field map. Fields with no matching label, and amount
    /// fields whose first capture holds no number, are absent.
    pub fn extract(text: &str) -> ExtractedFields {
        let normalized = normalize(text);
        let lines: Vec<&str> = normalized.lines().collect();

        let mut fields = ExtractedFields::new();
        for pattern in FIELD_PATTERNS.iter() {
            let Some(raw) = Self::capture(pattern, &lines) else {
                continue;
            };

            if pattern.field.is_amount() {
                match Money::parse_amount(&raw) {
                    Ok(money) => fields.insert(pattern.field, FieldValue::Amount(money)),
                    Err(error) => {
                        tracing::debug!(field = %pattern.field, %error, "Dropping unparseable amount");
                    }
                }
            } else {
                fields.insert(pattern.field, FieldValue::Text(raw));
            }
        }

        tracing::debug!(extracted = fields.len(), "Field extraction complete");
        fields
    }

    /// Finds the first non-blank capture for a field
    fn capture(pattern: &FieldPattern, lines: &[&str]) -> Option<String> {
        for (index, line) in lines.iter().enumerate() {
            let raw = pattern
                .aliases
                .iter()
                .find_map(|alias| alias.captures(line))
                .map(|caps| caps["value"].to_string());

            let Some(mut raw) = raw.filter(|v| !clean_value(v).is_empty()) else {
                continue;
            };

            if MULTILINE_FIELDS.contains(&pattern.field) {
                for next in &lines[index + 1..] {
                    if next.trim().is_empty() || LABEL_LINE.is_match(next) {
                        break;
                    }
                    raw.push(' ');
                    raw.push_str(next);
                }
            }

            return Some(clean_value(&raw));
        }
        None
    }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Collapses whitespace and strips trailing delimiters
fn clean_value(raw: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(raw, " ");
    collapsed
        .trim()
        .trim_end_matches(['.', ';', ','])
        .trim_end()
        .to_string()
}
