//! Reference workbook loading and validation.
//!
//! The authoritative spreadsheet is exported to a structured JSON
//! document; this crate owns its schema, loading, and semantic
//! validation. Only the Agreement table is needed at runtime — the
//! parameter sheets live in tt-catalog as typed constants.

pub mod reference;
pub mod validate;

pub use reference::{AgreementRow, ReferenceWorkbook};
pub use validate::{validate_workbook, ValidationError, ValidationResult};
