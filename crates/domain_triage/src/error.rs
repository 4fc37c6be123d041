//! Triage domain errors

use thiserror::Error;

/// Errors raised when parsing triage vocabulary from strings.
///
/// The pipeline itself never fails; these only surface when callers
/// convert external text into domain types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriageError {
    #[error("Unknown field name: {0}")]
    UnknownField(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}
