//! Threshold Triage common types and errors.
//!
//! This crate provides foundational types shared across tt-* crates:
//! - The recommendation record and its categorical enums
//! - Common error types with stable codes
//! - Output format specifications
//! - Artifact/workbook schema versioning

pub mod error;
pub mod model;
pub mod output;
pub mod schema;

pub use error::{Error, ErrorCategory, Result};
pub use model::{BleedingRisk, Decision, Group, Recommendation};
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;
