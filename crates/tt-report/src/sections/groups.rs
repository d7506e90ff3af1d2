//! Per-family match tallies, the input to the accuracy chart.

use serde::{Deserialize, Serialize};
use tt_common::Group;

/// Match/mismatch counts for one recommendation family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupTally {
    pub group: Group,
    pub matched: usize,
    pub mismatched: usize,
}

impl GroupTally {
    pub fn total(&self) -> usize {
        self.matched + self.mismatched
    }
}
