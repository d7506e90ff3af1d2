//! Semantic validation of the reference workbook.

use std::collections::HashSet;
use thiserror::Error;
use tt_common::SCHEMA_VERSION;

use crate::reference::ReferenceWorkbook;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reference workbook validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing table: {0}")]
    MissingTable(String),

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::MissingTable(_) => 62,
            ValidationError::SemanticError(_) => 63,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
        }
    }
}

/// Validate a workbook export semantically.
///
/// The Agreement table must be present, ids must be well-formed and
/// unique, decisions must be one of the three valid values (never the
/// Unknown sentinel), and any exported pVTE must be a probability.
pub fn validate_workbook(workbook: &ReferenceWorkbook) -> ValidationResult<()> {
    if workbook.schema_version != SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: SCHEMA_VERSION.to_string(),
            actual: workbook.schema_version.clone(),
        });
    }

    if workbook.agreement.is_empty() {
        return Err(ValidationError::MissingTable("Agreement".to_string()));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for (idx, row) in workbook.agreement.iter().enumerate() {
        let field = |name: &str| format!("agreement[{idx}].{name}");

        if row.id.is_empty() || !row.id.starts_with('R') {
            return Err(ValidationError::InvalidValue {
                field: field("id"),
                message: format!("recommendation ids start with 'R', got {:?}", row.id),
            });
        }

        if !seen.insert(row.id.as_str()) {
            return Err(ValidationError::SemanticError(format!(
                "duplicate Agreement id {:?}",
                row.id
            )));
        }

        if !row.ash_decision.is_known() {
            return Err(ValidationError::InvalidValue {
                field: field("ash_decision"),
                message: "must be one of NoRx, Test, Rx".to_string(),
            });
        }

        if let Some(eut) = row.eut_decision {
            if !eut.is_known() {
                return Err(ValidationError::InvalidValue {
                    field: field("eut_decision"),
                    message: "must be one of NoRx, Test, Rx".to_string(),
                });
            }
        }

        if let Some(p) = row.p_vte {
            if !(0.0..=1.0).contains(&p) {
                return Err(ValidationError::InvalidValue {
                    field: field("p_vte"),
                    message: format!("must be in [0, 1], got {p}"),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::AgreementRow;
    use tt_common::Decision;

    fn row(id: &str, decision: Decision) -> AgreementRow {
        AgreementRow {
            id: id.to_string(),
            ash_decision: decision,
            eut_decision: None,
            p_vte: Some(0.05),
        }
    }

    fn workbook(rows: Vec<AgreementRow>) -> ReferenceWorkbook {
        ReferenceWorkbook {
            schema_version: SCHEMA_VERSION.to_string(),
            description: None,
            agreement: rows,
        }
    }

    #[test]
    fn test_valid_workbook_passes() {
        let wb = workbook(vec![row("R1 low", Decision::Rx), row("R13", Decision::Test)]);
        assert!(validate_workbook(&wb).is_ok());
    }

    #[test]
    fn test_version_mismatch() {
        let mut wb = workbook(vec![row("R1 low", Decision::Rx)]);
        wb.schema_version = "0".to_string();
        assert!(matches!(
            validate_workbook(&wb),
            Err(ValidationError::VersionMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_agreement_is_missing_table() {
        let wb = workbook(vec![]);
        assert!(matches!(
            validate_workbook(&wb),
            Err(ValidationError::MissingTable(_))
        ));
    }

    #[test]
    fn test_unknown_decision_rejected() {
        let wb = workbook(vec![row("R1 low", Decision::Unknown)]);
        let err = validate_workbook(&wb).unwrap_err();
        assert_eq!(err.code(), 65);
        assert!(err.to_string().contains("ash_decision"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let wb = workbook(vec![row("R13", Decision::Test), row("R13", Decision::Rx)]);
        assert!(matches!(
            validate_workbook(&wb),
            Err(ValidationError::SemanticError(_))
        ));
    }

    #[test]
    fn test_out_of_range_p_vte_rejected() {
        let mut bad = row("R13", Decision::Test);
        bad.p_vte = Some(1.5);
        let wb = workbook(vec![bad]);
        assert!(matches!(
            validate_workbook(&wb),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_malformed_id_rejected() {
        let wb = workbook(vec![row("X1", Decision::Test)]);
        let err = validate_workbook(&wb).unwrap_err();
        assert!(err.to_string().contains("start with 'R'"));
    }
}
