//! Core Kernel - Foundational value types for FNOL triage
//!
//! This crate provides the building blocks shared by the triage pipeline
//! and its callers:
//! - Money types with precise decimal arithmetic and lenient amount parsing
//! - Calendar dates and coverage periods as written on claim forms

pub mod money;
pub mod temporal;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{CoveragePeriod, TemporalError, parse_date};
pub use error::CoreError;
