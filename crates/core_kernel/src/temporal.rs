//! Calendar dates and coverage periods read from claim documents
//!
//! Claim forms write dates in whatever format the submitter prefers.
//! This module accepts the common ones and models a policy's coverage
//! window as an inclusive date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date formats accepted in documents, tried in order
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Separators between the two ends of a written date range
const RANGE_SEPARATORS: [&str; 5] = [" to ", " through ", " until ", " - ", " – "];

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Unrecognised date: {0}")]
    UnrecognisedDate(String),

    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },
}

/// Parses a single calendar date written in one of the accepted formats.
///
/// Surrounding whitespace and trailing punctuation are ignored.
pub fn parse_date(text: &str) -> Result<NaiveDate, TemporalError> {
    let cleaned = text.trim().trim_end_matches(['.', ',', ';']);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(cleaned, format).ok())
        .ok_or_else(|| TemporalError::UnrecognisedDate(cleaned.to_string()))
}

/// The period during which a policy provides cover.
///
/// Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveragePeriod {
    /// First covered day
    pub start: NaiveDate,
    /// Last covered day
    pub end: NaiveDate,
}

impl CoveragePeriod {
    /// Creates a new coverage period
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parses a written range such as `01/01/2024 - 12/31/2024`
    /// or `2024-01-01 to 2024-12-31`.
    pub fn parse(text: &str) -> Result<Self, TemporalError> {
        let (start, end) = RANGE_SEPARATORS
            .iter()
            .find_map(|sep| text.split_once(sep))
            .ok_or_else(|| TemporalError::UnrecognisedDate(text.trim().to_string()))?;

        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// Returns true if `date` falls within the period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
