//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! FNOL triage test suite.
//!
//! # Modules
//!
//! - `fixtures`: Ready-made FNOL documents for common scenarios
//! - `builders`: Builder for rendering FNOL documents field by field
//! - `assertions`: Custom assertion helpers for triage results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
