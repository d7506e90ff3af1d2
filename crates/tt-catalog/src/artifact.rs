//! The serialized catalog artifact.
//!
//! One JSON document, readable both by the consuming web calculator and
//! by downstream tooling. Writes are atomic: the full document lands in a
//! sibling temp file first and is renamed into place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tt_common::{Error, Group, Recommendation, Result, SCHEMA_VERSION};

/// Per-group record counts, exposed for validation by external tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCounts {
    #[serde(rename = "R1-R10")]
    pub r1_r10: usize,
    #[serde(rename = "R11-R14")]
    pub r11_r14: usize,
    #[serde(rename = "R15-R20")]
    pub r15_r20: usize,
    #[serde(rename = "R21-R23")]
    pub r21_r23: usize,
    pub total: usize,
}

impl GroupCounts {
    /// Tally records by group.
    pub fn tally(records: &[Recommendation]) -> Self {
        let count = |group: Group| records.iter().filter(|r| r.group == group).count();
        GroupCounts {
            r1_r10: count(Group::R1R10),
            r11_r14: count(Group::R11R14),
            r15_r20: count(Group::R15R20),
            r21_r23: count(Group::R21R23),
            total: records.len(),
        }
    }

    pub fn for_group(&self, group: Group) -> usize {
        match group {
            Group::R1R10 => self.r1_r10,
            Group::R11R14 => self.r11_r14,
            Group::R15R20 => self.r15_r20,
            Group::R21R23 => self.r21_r23,
        }
    }
}

/// The full catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogArtifact {
    pub schema_version: String,

    pub generated_at: DateTime<Utc>,

    pub counts: GroupCounts,

    /// Records in build order (R1-R10 expansion first, then the literal
    /// families).
    pub records: Vec<Recommendation>,
}

impl CatalogArtifact {
    /// Wrap a validated record set. Counts are tallied here; the builder
    /// has already enforced the partition invariant.
    pub fn new(records: Vec<Recommendation>) -> Self {
        CatalogArtifact {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            counts: GroupCounts::tally(&records),
            records,
        }
    }

    /// Re-check the stored counts against the records. Used after loading
    /// a foreign artifact; a mismatch means the document was edited by
    /// hand or truncated.
    pub fn validate(&self) -> Result<()> {
        let tallied = GroupCounts::tally(&self.records);
        if tallied != self.counts {
            return Err(Error::Verify(format!(
                "artifact counts {:?} disagree with records {:?}",
                self.counts, tallied
            )));
        }
        for group in Group::ALL {
            let actual = tallied.for_group(group);
            let expected = group.expected_count();
            if actual != expected {
                return Err(Error::GroupCount {
                    group: group.to_string(),
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Serialize as pretty JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Write the complete document atomically.
    pub fn write_atomic(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json.as_bytes())?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Load an artifact through its own schema.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "cannot read catalog artifact {}: {e}",
                path.display()
            ))
        })?;
        let artifact: CatalogArtifact = serde_json::from_str(&raw)
            .map_err(|e| Error::Verify(format!("malformed catalog artifact {}: {e}", path.display())))?;
        Ok(artifact)
    }
}
