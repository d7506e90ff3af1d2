//! Report configuration.

use serde::{Deserialize, Serialize};

/// Options controlling report content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report title; a default is derived when absent.
    pub title: Option<String>,

    /// Include matched rows in the detail table. Mismatches are always
    /// shown.
    pub include_matches: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            title: None,
            include_matches: true,
        }
    }
}
