//! Threshold Triage core: catalog building and decision verification.
//!
//! The binary wires two independent components together:
//! - `build`: expand the literal parameter tables into the 69-record
//!   catalog artifact, resolving reference decisions.
//! - `verify`: recompute every decision from stored parameters and check
//!   it against the artifact and the reference workbook.

pub mod exit_codes;
pub mod logging;
pub mod output;
pub mod verify;
