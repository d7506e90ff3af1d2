//! Exit codes for the tt-core CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing.
//!
//! Exit code ranges:
//! - 0-9: Success/operational outcomes (parse outcome from code, not output)
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors (bugs, should be reported)

/// Exit codes for tt-core operations.
///
/// These codes are a stable contract for automation. Changes require
/// a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success: artifact written / all comparisons matched
    Clean = 0,

    /// Verification ran to completion and found mismatches
    MismatchesFound = 1,

    /// Invalid arguments
    ArgsError = 10,

    /// Reference workbook or catalog artifact missing/invalid
    SourceError = 11,

    /// Catalog completeness invariant violated
    CatalogError = 12,

    /// Internal error (bug - please report)
    InternalError = 20,

    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates an operational outcome (0-9).
    /// These are not errors - they communicate workflow state.
    pub fn is_operational(self) -> bool {
        (self as i32) < 10
    }

    /// Map an error to its exit code by category.
    pub fn from_error(err: &tt_common::Error) -> Self {
        use tt_common::ErrorCategory;
        match err.category() {
            ErrorCategory::Config => ExitCode::SourceError,
            ErrorCategory::Catalog => ExitCode::CatalogError,
            ErrorCategory::Verify => ExitCode::SourceError,
            ErrorCategory::Io => ExitCode::IoError,
        }
    }
}
