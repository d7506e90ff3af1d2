//! Overview section: run-level statistics.

use serde::{Deserialize, Serialize};

/// Headline numbers for a verification run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverviewSection {
    /// Comparisons attempted (catalog records matched to reference rows,
    /// including one-to-many expansions).
    pub total: usize,

    /// Comparisons where the catalog decision matched the reference.
    pub matched: usize,

    /// Comparisons that disagreed (includes Unknown on either side).
    pub mismatched: usize,

    /// Match rate in percent, 0 when nothing was compared.
    pub match_rate: f64,

    /// Records loaded from the catalog artifact.
    pub catalog_records: usize,

    /// Rows loaded from the reference Agreement table.
    pub reference_rows: usize,

    /// Load or data-quality problems worth a reader's attention.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}
