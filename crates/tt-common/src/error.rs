//! Error types for Threshold Triage.
//!
//! Structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Recoverability hints
//! - Remediation suggestions for humans
//!
//! # Human-Facing Output
//!
//! Errors can be formatted for human consumption with headline, reason, and fix:
//! ```text
//! ✗ Invalid Reference Workbook
//!   Reason: reference workbook invalid: agreement[3].ash_decision: unrecognized value "Maybe"
//!   Fix: Run 'tt-core check --reference <file>' to validate the workbook export.
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Threshold Triage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Reference workbook loading and validation errors.
    Config,
    /// Catalog construction and completeness errors.
    Catalog,
    /// Verification errors (loading inputs, threshold math).
    Verify,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Catalog => write!(f, "catalog"),
            ErrorCategory::Verify => write!(f, "verify"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for Threshold Triage.
#[derive(Error, Debug)]
pub enum Error {
    // Reference workbook errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("reference workbook invalid: {0}")]
    InvalidReference(String),

    #[error("reference workbook missing table: {0}")]
    MissingTable(String),

    // Catalog errors (20-29)
    #[error("catalog record count mismatch: expected {expected}, got {actual}")]
    CatalogCount { expected: usize, actual: usize },

    #[error("group {group} record count mismatch: expected {expected}, got {actual}")]
    GroupCount {
        group: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate recommendation id: {id}")]
    DuplicateId { id: String },

    // Verification errors (30-39)
    #[error("verification failed: {0}")]
    Verify(String),

    #[error("threshold computation failed for {id}: {message}")]
    Threshold { id: String, message: String },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code for this error type.
    ///
    /// Error codes are grouped by category:
    /// - 10-19: Reference workbook errors
    /// - 20-29: Catalog errors
    /// - 30-39: Verification errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidReference(_) => 11,
            Error::MissingTable(_) => 12,
            Error::CatalogCount { .. } => 20,
            Error::GroupCount { .. } => 21,
            Error::DuplicateId { .. } => 22,
            Error::Verify(_) => 30,
            Error::Threshold { .. } => 31,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) | Error::InvalidReference(_) | Error::MissingTable(_) => {
                ErrorCategory::Config
            }
            Error::CatalogCount { .. } | Error::GroupCount { .. } | Error::DuplicateId { .. } => {
                ErrorCategory::Catalog
            }
            Error::Verify(_) | Error::Threshold { .. } => ErrorCategory::Verify,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns whether this error is potentially recoverable by user action.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Workbook errors: fix the export and retry.
            Error::Config(_) => true,
            Error::InvalidReference(_) => true,
            Error::MissingTable(_) => true,

            // Catalog invariant violations point at the literal tables.
            Error::CatalogCount { .. } => false,
            Error::GroupCount { .. } => false,
            Error::DuplicateId { .. } => false,

            Error::Verify(_) => true,
            Error::Threshold { .. } => false, // Bad literal parameters

            Error::Io(_) => true,
            Error::Json(_) => true,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Config(_) => {
                "Check the --reference path and that the workbook export is valid JSON."
            }
            Error::InvalidReference(_) => {
                "Run 'tt-core check --reference <file>' to validate the workbook export."
            }
            Error::MissingTable(_) => {
                "Re-export the workbook; the Agreement table must be present."
            }

            Error::CatalogCount { .. } | Error::GroupCount { .. } => {
                "The literal parameter tables are incomplete. This is a build defect; do not ship the artifact."
            }
            Error::DuplicateId { .. } => {
                "Two literal table rows share an id. Fix the tables before rebuilding."
            }

            Error::Verify(_) => {
                "Rebuild the catalog with 'tt-core build' and re-run verification."
            }
            Error::Threshold { .. } => {
                "A record carries parameters outside the model's domain. Check the literal tables."
            }

            Error::Io(_) => {
                "Check disk space, permissions, and that the output directory exists."
            }
            Error::Json(_) => {
                "Invalid JSON in an input file. Check syntax with 'jq .' or regenerate the file."
            }
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Config(_) => "Configuration Error",
            Error::InvalidReference(_) => "Invalid Reference Workbook",
            Error::MissingTable(_) => "Missing Workbook Table",
            Error::CatalogCount { .. } => "Catalog Count Invariant Violated",
            Error::GroupCount { .. } => "Group Count Invariant Violated",
            Error::DuplicateId { .. } => "Duplicate Recommendation Id",
            Error::Verify(_) => "Verification Error",
            Error::Threshold { .. } => "Threshold Computation Error",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Parse Error",
        }
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}
