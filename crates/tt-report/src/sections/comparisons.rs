//! Per-record comparison rows.

use serde::{Deserialize, Serialize};
use tt_common::{Decision, Group};

/// One catalog record checked against the reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Catalog id, e.g. "R1 low".
    pub catalog_id: String,

    /// Family the record belongs to, for per-group tallies.
    pub group: Group,

    /// Reference id it was matched to ("R1" may stand for both bleeding
    /// variants); absent when the reference has no row for this record.
    pub reference_id: Option<String>,

    /// Decision stored in the catalog artifact.
    pub catalog_decision: Decision,

    /// Decision from the reference Agreement table.
    pub reference_decision: Option<Decision>,

    /// Decision recomputed from the record's own parameters.
    pub recomputed_decision: Option<Decision>,

    pub catalog_p_vte: f64,

    pub reference_p_vte: Option<f64>,

    /// Catalog decision equals reference decision (Unknown never matches).
    pub ash_matches: bool,

    /// Recomputed decision equals the stored catalog decision.
    pub eut_agrees: Option<bool>,
}
