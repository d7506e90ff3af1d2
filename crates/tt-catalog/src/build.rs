//! Catalog construction.
//!
//! Expands the literal tables into the full record set, resolves the
//! reference decision per id, and enforces the completeness invariant
//! before the artifact exists.

use std::collections::HashSet;
use tracing::warn;
use tt_common::{BleedingRisk, Decision, Error, Group, Recommendation, Result};
use tt_config::ReferenceWorkbook;

use crate::artifact::CatalogArtifact;
use crate::tables;

/// A built catalog plus the ids whose reference lookup failed.
///
/// Unresolved lookups are data-quality findings, not build failures:
/// the records carry `Decision::Unknown` and the build proceeds.
#[derive(Debug)]
pub struct BuildOutcome {
    pub artifact: CatalogArtifact,
    pub unresolved: Vec<String>,
}

/// Display precision tiers. Each family keeps its own policy; downstream
/// display depends on the exact boundaries, so they are not unified.
fn decimals_r1_r10(p_vte: f64) -> u8 {
    if p_vte < 0.1 {
        2
    } else {
        1
    }
}

fn decimals_r11_r14(p_vte: f64) -> u8 {
    if p_vte < 0.01 {
        3
    } else {
        2
    }
}

fn decimals_r21_r23(p_vte: f64) -> u8 {
    if p_vte < 0.01 {
        4
    } else {
        3
    }
}

const DECIMALS_R15_R20: u8 = 4;

/// Build the full 69-record catalog.
///
/// Fails before producing an artifact if the record set violates the
/// count partition {R1-R10: 20, R11-R14: 16, R15-R20: 21, R21-R23: 12}
/// or contains a duplicate id.
pub fn build_catalog(reference: &ReferenceWorkbook) -> Result<BuildOutcome> {
    let index = reference.decision_index();
    let mut records = Vec::with_capacity(Group::TOTAL);
    let mut unresolved = Vec::new();

    let mut resolve = |id: &str| -> Decision {
        match index.get(id) {
            Some(row) => row.ash_decision,
            None => {
                warn!(id, "no reference decision for id; recording Unknown");
                unresolved.push(id.to_string());
                Decision::Unknown
            }
        }
    };

    for row in &tables::R1_R10_BASE {
        for variant in BleedingRisk::ALL {
            let id = format!("{} {}", row.id, variant.id_suffix());
            let h = variant.hazard();
            records.push(Recommendation {
                ash_decision: resolve(&id),
                id,
                p_vte: row.p_vte,
                tp: row.tp,
                rr_t: row.rr_t,
                rr_rx: row.rr_rx,
                h_low: h,
                h_high: h,
                rr_bleed: row.rr_bleed,
                decimals: decimals_r1_r10(row.p_vte),
                description: format!("{} ({} bleeding risk)", row.description, variant.label()),
                category: row.category.to_string(),
                group: Group::R1R10,
                bleeding_risk: Some(variant),
                is_reversed: false,
            });
        }
    }

    for row in &tables::R11_R14 {
        records.push(Recommendation {
            ash_decision: resolve(row.id),
            id: row.id.to_string(),
            p_vte: row.p_vte,
            tp: row.tp,
            rr_t: row.rr_t,
            rr_rx: row.rr_rx,
            h_low: row.h,
            h_high: row.h,
            rr_bleed: row.rr_bleed,
            decimals: decimals_r11_r14(row.p_vte),
            description: row.description.to_string(),
            category: tables::FAMILY_HISTORY.to_string(),
            group: Group::R11R14,
            bleeding_risk: None,
            is_reversed: false,
        });
    }

    for row in &tables::R15_R20 {
        records.push(Recommendation {
            ash_decision: resolve(row.id),
            id: row.id.to_string(),
            p_vte: row.p_vte,
            tp: row.tp,
            rr_t: row.rr_t,
            rr_rx: row.rr_rx,
            h_low: row.h,
            h_high: row.h,
            // No bleeding multiplier in the reversed model.
            rr_bleed: 1.0,
            decimals: DECIMALS_R15_R20,
            description: row.description.to_string(),
            category: tables::COC_HRT.to_string(),
            group: Group::R15R20,
            bleeding_risk: None,
            is_reversed: true,
        });
    }

    for row in &tables::R21_R23 {
        records.push(Recommendation {
            ash_decision: resolve(row.id),
            id: row.id.to_string(),
            p_vte: row.p_vte,
            tp: row.tp,
            rr_t: row.rr_t,
            rr_rx: row.rr_rx,
            h_low: row.h,
            h_high: row.h,
            rr_bleed: row.rr_bleed,
            decimals: decimals_r21_r23(row.p_vte),
            description: row.description.to_string(),
            category: tables::PREGNANCY.to_string(),
            group: Group::R21R23,
            bleeding_risk: None,
            is_reversed: false,
        });
    }

    check_completeness(&records)?;

    Ok(BuildOutcome {
        artifact: CatalogArtifact::new(records),
        unresolved,
    })
}

/// Enforce uniqueness and the fixed count partition.
fn check_completeness(records: &[Recommendation]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for rec in records {
        if !seen.insert(rec.id.as_str()) {
            return Err(Error::DuplicateId {
                id: rec.id.clone(),
            });
        }
    }

    for group in Group::ALL {
        let actual = records.iter().filter(|r| r.group == group).count();
        let expected = group.expected_count();
        if actual != expected {
            return Err(Error::GroupCount {
                group: group.to_string(),
                expected,
                actual,
            });
        }
    }

    if records.len() != Group::TOTAL {
        return Err(Error::CatalogCount {
            expected: Group::TOTAL,
            actual: records.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimals_boundaries() {
        // Boundaries are exclusive: the coarser tier applies at the cut.
        assert_eq!(decimals_r1_r10(0.10), 1);
        assert_eq!(decimals_r1_r10(0.099), 2);
        assert_eq!(decimals_r1_r10(0.01), 2);

        assert_eq!(decimals_r11_r14(0.01), 2);
        assert_eq!(decimals_r11_r14(0.0099), 3);

        assert_eq!(decimals_r21_r23(0.01), 3);
        assert_eq!(decimals_r21_r23(0.009), 4);
    }
}
