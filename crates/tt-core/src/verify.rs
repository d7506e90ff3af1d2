//! Decision verification.
//!
//! Recomputes every catalog record's decision from its stored parameters
//! and checks it against both the decision stored in the artifact and the
//! reference workbook's Agreement table. Purely diagnostic: nothing here
//! mutates the catalog.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};
use tt_catalog::CatalogArtifact;
use tt_common::{Decision, Group, Recommendation};
use tt_config::{AgreementRow, ReferenceWorkbook};
use tt_math::{decide, ThresholdModel, ThresholdParams, DEFAULT_RV};
use tt_report::sections::{ComparisonRow, GroupTally, OverviewSection};
use tt_report::ReportData;

/// Aggregated verification statistics.
#[derive(Debug, Clone, Serialize)]
pub struct VerifySummary {
    pub total: usize,
    pub matched: usize,
    pub mismatched: usize,
    /// Match rate in percent, 0 when nothing was compared.
    pub match_rate: f64,
    pub groups: Vec<GroupTally>,
}

/// Full verification outcome.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResult {
    pub summary: VerifySummary,
    pub comparisons: Vec<ComparisonRow>,
    /// Data-quality findings that are not per-row mismatches: hazard
    /// divergence, threshold-domain violations, reference rows that
    /// matched nothing.
    pub warnings: Vec<String>,
    pub catalog_records: usize,
    pub reference_rows: usize,
}

impl VerifyResult {
    /// An empty result carrying only load errors, for runs where an
    /// input could not be read.
    pub fn empty_with_errors(errors: Vec<String>) -> Self {
        VerifyResult {
            summary: VerifySummary {
                total: 0,
                matched: 0,
                mismatched: 0,
                match_rate: 0.0,
                groups: Vec::new(),
            },
            comparisons: Vec::new(),
            warnings: errors,
            catalog_records: 0,
            reference_rows: 0,
        }
    }

    /// Assemble the data for an HTML report.
    pub fn report_data(&self) -> ReportData {
        let overview = OverviewSection {
            total: self.summary.total,
            matched: self.summary.matched,
            mismatched: self.summary.mismatched,
            match_rate: self.summary.match_rate,
            catalog_records: self.catalog_records,
            reference_rows: self.reference_rows,
            warnings: self.warnings.clone(),
        };
        ReportData::new(overview, self.summary.groups.clone(), self.comparisons.clone())
    }
}

/// Find the Agreement row for a catalog record.
///
/// Exact id first; bleeding-risk variants also answer to the bare base
/// id, so one reference row may match two catalog records. Returns the
/// reference id actually used.
fn match_reference<'a>(
    index: &HashMap<&'a str, &'a AgreementRow>,
    rec: &Recommendation,
) -> Option<(&'a str, &'a AgreementRow)> {
    if let Some(row) = index.get(rec.id.as_str()) {
        return Some((row.id.as_str(), *row));
    }
    if rec.bleeding_risk.is_some() {
        if let Some(base) = rec
            .id
            .strip_suffix(" low")
            .or_else(|| rec.id.strip_suffix(" high"))
        {
            if let Some(row) = index.get(base) {
                return Some((row.id.as_str(), *row));
            }
        }
    }
    None
}

/// Recompute the decision for one record from its stored parameters.
fn recompute(rec: &Recommendation, warnings: &mut Vec<String>) -> Option<Decision> {
    let params = ThresholdParams {
        rv: DEFAULT_RV,
        h: rec.hazard(),
        rr_rx: rec.rr_rx,
        rr_t: rec.rr_t,
        tp: rec.tp,
        rr_bleed: rec.rr_bleed,
    };
    let model = ThresholdModel::for_reversed(rec.is_reversed);
    match decide(model, rec.p_vte, &params) {
        Ok(decision) => Some(decision),
        Err(err) => {
            warn!(id = %rec.id, %err, "threshold recomputation failed");
            warnings.push(format!("{}: {err}", rec.id));
            None
        }
    }
}

/// Compare every catalog record against the reference.
///
/// Every record yields exactly one comparison row; records without a
/// reference counterpart count as mismatches, and reference rows that
/// matched no record are surfaced as warnings.
pub fn verify_catalog(artifact: &CatalogArtifact, reference: &ReferenceWorkbook) -> VerifyResult {
    let index = reference.decision_index();
    let mut comparisons = Vec::with_capacity(artifact.records.len());
    let mut warnings = Vec::new();
    let mut used_reference_ids: HashSet<&str> = HashSet::new();

    if let Err(err) = artifact.validate() {
        warnings.push(format!("catalog artifact failed validation: {err}"));
    }

    for rec in &artifact.records {
        if rec.hazard_diverges() {
            warnings.push(format!(
                "{}: hazard pair diverges (H_low={}, H_high={}); using H_low",
                rec.id, rec.h_low, rec.h_high
            ));
        }

        let matched = match_reference(&index, rec);
        if let Some((ref_id, _)) = matched {
            used_reference_ids.insert(ref_id);
        }

        let reference_decision = matched.map(|(_, row)| row.ash_decision);
        let recomputed_decision = recompute(rec, &mut warnings);

        // Unknown on either side is always a reported mismatch.
        let ash_matches = reference_decision
            .map(|d| rec.ash_decision.matches(d))
            .unwrap_or(false);
        let eut_agrees = recomputed_decision.map(|d| d.matches(rec.ash_decision));

        debug!(
            id = %rec.id,
            catalog = %rec.ash_decision,
            reference = ?reference_decision,
            recomputed = ?recomputed_decision,
            ash_matches,
            "compared record"
        );

        comparisons.push(ComparisonRow {
            catalog_id: rec.id.clone(),
            group: rec.group,
            reference_id: matched.map(|(id, _)| id.to_string()),
            catalog_decision: rec.ash_decision,
            reference_decision,
            recomputed_decision,
            catalog_p_vte: rec.p_vte,
            reference_p_vte: matched.and_then(|(_, row)| row.p_vte),
            ash_matches,
            eut_agrees,
        });
    }

    for row in &reference.agreement {
        if !used_reference_ids.contains(row.id.as_str()) {
            warnings.push(format!("reference row {} matched no catalog record", row.id));
        }
    }

    let total = comparisons.len();
    let matched = comparisons.iter().filter(|c| c.ash_matches).count();
    let mismatched = total - matched;
    let match_rate = if total > 0 {
        100.0 * matched as f64 / total as f64
    } else {
        0.0
    };

    let groups = Group::ALL
        .iter()
        .map(|&group| {
            let in_group = comparisons.iter().filter(|c| c.group == group);
            let matched = in_group.clone().filter(|c| c.ash_matches).count();
            let total = in_group.count();
            GroupTally {
                group,
                matched,
                mismatched: total - matched,
            }
        })
        .collect();

    VerifyResult {
        summary: VerifySummary {
            total,
            matched,
            mismatched,
            match_rate,
            groups,
        },
        comparisons,
        warnings,
        catalog_records: artifact.records.len(),
        reference_rows: reference.agreement.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tt_common::{BleedingRisk, SCHEMA_VERSION};

    fn record(id: &str, group: Group, decision: Decision) -> Recommendation {
        Recommendation {
            id: id.to_string(),
            p_vte: 0.10,
            tp: 0.38,
            rr_t: 1.65,
            rr_rx: 0.15,
            h_low: 0.005,
            h_high: 0.005,
            rr_bleed: 2.17,
            decimals: 1,
            description: "x".to_string(),
            ash_decision: decision,
            category: "c".to_string(),
            group,
            bleeding_risk: id
                .ends_with(" low")
                .then_some(BleedingRisk::Low)
                .or_else(|| id.ends_with(" high").then_some(BleedingRisk::High)),
            is_reversed: false,
        }
    }

    fn reference(rows: &[(&str, Decision)]) -> ReferenceWorkbook {
        ReferenceWorkbook {
            schema_version: SCHEMA_VERSION.to_string(),
            description: None,
            agreement: rows
                .iter()
                .map(|(id, decision)| AgreementRow {
                    id: id.to_string(),
                    ash_decision: *decision,
                    eut_decision: None,
                    p_vte: Some(0.10),
                })
                .collect(),
        }
    }

    fn artifact(records: Vec<Recommendation>) -> CatalogArtifact {
        CatalogArtifact::new(records)
    }

    #[test]
    fn bare_reference_id_matches_both_variants() {
        let artifact = artifact(vec![
            record("R1 low", Group::R1R10, Decision::Rx),
            record("R1 high", Group::R1R10, Decision::Rx),
        ]);
        let result = verify_catalog(&artifact, &reference(&[("R1", Decision::Rx)]));

        assert_eq!(result.summary.total, 2);
        assert_eq!(result.summary.matched, 2);
        for row in &result.comparisons {
            assert_eq!(row.reference_id.as_deref(), Some("R1"));
        }
        // The bare row was consumed, so no unmatched-reference warning.
        assert!(result
            .warnings
            .iter()
            .all(|w| !w.contains("matched no catalog record")));
    }

    #[test]
    fn exact_id_wins_over_base_expansion() {
        let artifact = artifact(vec![record("R1 low", Group::R1R10, Decision::Rx)]);
        let result = verify_catalog(
            &artifact,
            &reference(&[("R1", Decision::NoRx), ("R1 low", Decision::Rx)]),
        );

        let row = &result.comparisons[0];
        assert_eq!(row.reference_id.as_deref(), Some("R1 low"));
        assert!(row.ash_matches);
    }

    #[test]
    fn unknown_is_always_a_mismatch() {
        let artifact = artifact(vec![record("R1 low", Group::R1R10, Decision::Unknown)]);
        let result = verify_catalog(&artifact, &reference(&[("R1 low", Decision::Rx)]));

        assert_eq!(result.summary.matched, 0);
        assert_eq!(result.summary.mismatched, 1);
        assert!(!result.comparisons[0].ash_matches);
    }

    #[test]
    fn missing_reference_row_is_a_reported_mismatch() {
        let artifact = artifact(vec![record("R1 low", Group::R1R10, Decision::Rx)]);
        let result = verify_catalog(&artifact, &reference(&[("R13", Decision::Test)]));

        assert_eq!(result.summary.total, 1);
        assert_eq!(result.summary.mismatched, 1);
        assert_eq!(result.comparisons[0].reference_id, None);
        // The unconsumed reference row is surfaced.
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("R13") && w.contains("matched no catalog record")));
    }

    #[test]
    fn recomputed_decision_agrees_for_r1_low() {
        // R1 low parameters: pVTE far above Pt, so the stored Rx agrees.
        let artifact = artifact(vec![record("R1 low", Group::R1R10, Decision::Rx)]);
        let result = verify_catalog(&artifact, &reference(&[("R1 low", Decision::Rx)]));

        let row = &result.comparisons[0];
        assert_eq!(row.recomputed_decision, Some(Decision::Rx));
        assert_eq!(row.eut_agrees, Some(true));
    }

    #[test]
    fn hazard_divergence_is_warned_not_fatal() {
        let mut rec = record("R1 low", Group::R1R10, Decision::Rx);
        rec.h_high = 0.015;
        let artifact = artifact(vec![rec]);
        let result = verify_catalog(&artifact, &reference(&[("R1 low", Decision::Rx)]));

        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("hazard pair diverges")));
        assert_eq!(result.summary.matched, 1);
    }

    #[test]
    fn degenerate_parameters_yield_warning_not_crash() {
        let mut rec = record("R1 low", Group::R1R10, Decision::Rx);
        rec.rr_rx = 1.0;
        let artifact = artifact(vec![rec]);
        let result = verify_catalog(&artifact, &reference(&[("R1 low", Decision::Rx)]));

        let row = &result.comparisons[0];
        assert_eq!(row.recomputed_decision, None);
        assert_eq!(row.eut_agrees, None);
        assert!(result.warnings.iter().any(|w| w.contains("R1 low")));
    }

    #[test]
    fn per_group_tallies_cover_all_families() {
        let artifact = artifact(vec![
            record("R1 low", Group::R1R10, Decision::Rx),
            record("R13", Group::R11R14, Decision::Test),
        ]);
        let result = verify_catalog(
            &artifact,
            &reference(&[("R1 low", Decision::Rx), ("R13", Decision::Rx)]),
        );

        assert_eq!(result.summary.groups.len(), 4);
        let r1 = result
            .summary
            .groups
            .iter()
            .find(|t| t.group == Group::R1R10)
            .unwrap();
        assert_eq!((r1.matched, r1.mismatched), (1, 0));
        let r11 = result
            .summary
            .groups
            .iter()
            .find(|t| t.group == Group::R11R14)
            .unwrap();
        assert_eq!((r11.matched, r11.mismatched), (0, 1));
    }

    #[test]
    fn empty_result_carries_load_errors() {
        let result = VerifyResult::empty_with_errors(vec!["cannot read catalog".to_string()]);
        assert_eq!(result.summary.total, 0);
        assert_eq!(result.summary.match_rate, 0.0);
        assert_eq!(result.warnings.len(), 1);

        let data = result.report_data();
        assert_eq!(data.overview.total, 0);
        assert_eq!(data.overview.warnings.len(), 1);
    }
}
