//! Reference workbook schema and loading.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tt_common::{Decision, Error, Result};

/// One row of the Agreement table: the reference decision (and pVTE)
/// for a recommendation id.
///
/// Ids may be exact ("R11a") or bare ("R1"), the latter standing for
/// every bleeding-risk variant of that base scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementRow {
    pub id: String,

    pub ash_decision: Decision,

    /// The workbook's own expected-utility decision, when exported.
    #[serde(default)]
    pub eut_decision: Option<Decision>,

    /// Reference pVTE for side-by-side display.
    #[serde(default)]
    pub p_vte: Option<f64>,
}

/// The exported reference workbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceWorkbook {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    /// The Agreement table: recommendation id -> reference decision.
    pub agreement: Vec<AgreementRow>,
}

impl ReferenceWorkbook {
    /// Load and validate a workbook export.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "cannot read reference workbook {}: {e}",
                path.display()
            ))
        })?;

        let workbook: ReferenceWorkbook = serde_json::from_str(&raw)
            .map_err(|e| Error::InvalidReference(format!("{}: {e}", path.display())))?;

        crate::validate::validate_workbook(&workbook)
            .map_err(|e| Error::InvalidReference(e.to_string()))?;

        Ok(workbook)
    }

    /// Index the Agreement table by exact id.
    pub fn decision_index(&self) -> HashMap<&str, &AgreementRow> {
        self.agreement
            .iter()
            .map(|row| (row.id.as_str(), row))
            .collect()
    }

    /// Look up the reference decision for an exact id.
    pub fn decision_for(&self, id: &str) -> Option<Decision> {
        self.agreement
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.ash_decision)
    }
}
