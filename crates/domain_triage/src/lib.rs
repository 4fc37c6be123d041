//! FNOL Triage Domain
//!
//! This crate turns the plain text of a First Notice of Loss (FNOL) document
//! into a routing decision for the claims team.
//!
//! # Pipeline
//!
//! ```text
//! FieldExtractor -> Validator ----------\
//!               \-> InconsistencyChecker -> RoutingEngine -> ReasoningGenerator
//! ```
//!
//! Every stage is a pure, synchronous function over read-only tables, so
//! documents can be triaged concurrently without coordination.

pub mod field;
pub mod extractor;
pub mod validation;
pub mod inconsistency;
pub mod routing;
pub mod reasoning;
pub mod pipeline;
pub mod error;

pub use field::{ExtractedFields, FieldName, FieldValue};
pub use extractor::FieldExtractor;
pub use validation::{Validator, MANDATORY_FIELDS};
pub use inconsistency::{
    InconsistencyChecker, InconsistencyFlag, InconsistencyKind, ESTIMATE_MISMATCH_RATIO,
};
pub use routing::{
    CascadeOutcome, FiredRule, RouteDecision, RoutingEngine, RoutingTrace,
    FAST_TRACK_THRESHOLD, FRAUD_KEYWORDS,
};
pub use reasoning::ReasoningGenerator;
pub use pipeline::{process, TriageResult};
pub use error::TriageError;
