//! Command output rendering.
//!
//! All payloads go to stdout in the format selected by `--format`;
//! logging stays on stderr.

use serde::Serialize;
use tt_catalog::GroupCounts;
use tt_common::{Group, OutputFormat, Result};

use crate::verify::VerifyResult;

/// Build command payload.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub artifact_path: String,
    pub counts: GroupCounts,
    /// Ids whose reference decision lookup failed (recorded as Unknown).
    pub unresolved: Vec<String>,
}

/// Render the build outcome.
pub fn render_build(summary: &BuildSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Md => {
            let mut out = String::from("# Catalog Build\n\n");
            out.push_str("| Group | Records |\n|---|---|\n");
            for group in Group::ALL {
                out.push_str(&format!(
                    "| {} | {} |\n",
                    group,
                    summary.counts.for_group(group)
                ));
            }
            out.push_str(&format!("| total | {} |\n", summary.counts.total));
            if summary.unresolved.is_empty() {
                out.push_str("\nAll reference decisions resolved.\n");
            } else {
                out.push_str(&format!(
                    "\nUnresolved reference decisions ({}):\n",
                    summary.unresolved.len()
                ));
                for id in &summary.unresolved {
                    out.push_str(&format!("- {id}\n"));
                }
            }
            out.push_str(&format!("\nArtifact written to {}\n", summary.artifact_path));
            Ok(out)
        }
        OutputFormat::Summary => Ok(format!(
            "{} records ({} unresolved) -> {}",
            summary.counts.total,
            summary.unresolved.len(),
            summary.artifact_path
        )),
    }
}

/// Render the verification outcome.
pub fn render_verify(result: &VerifyResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Md => {
            let s = &result.summary;
            let mut out = String::from("# Verification Results\n\n");
            out.push_str(&format!(
                "- Total comparisons: {}\n- Matches: {}\n- Mismatches: {}\n- Accuracy: {:.1}%\n",
                s.total, s.matched, s.mismatched, s.match_rate
            ));

            out.push_str("\n| Group | Matched | Mismatched |\n|---|---|---|\n");
            for tally in &s.groups {
                out.push_str(&format!(
                    "| {} | {} | {} |\n",
                    tally.group, tally.matched, tally.mismatched
                ));
            }

            let mismatches: Vec<_> = result
                .comparisons
                .iter()
                .filter(|c| !c.ash_matches)
                .collect();
            if mismatches.is_empty() {
                out.push_str("\nAll recommendations match.\n");
            } else {
                out.push_str("\nMismatches:\n");
                for row in mismatches {
                    out.push_str(&format!(
                        "- {}: catalog={}, reference={}\n",
                        row.catalog_id,
                        row.catalog_decision,
                        row.reference_decision
                            .map(|d| d.to_string())
                            .unwrap_or_else(|| "N/A".to_string()),
                    ));
                }
            }

            if !result.warnings.is_empty() {
                out.push_str("\nWarnings:\n");
                for warning in &result.warnings {
                    out.push_str(&format!("- {warning}\n"));
                }
            }
            Ok(out)
        }
        OutputFormat::Summary => Ok(format!(
            "{} comparisons: {} matched, {} mismatched ({:.1}%)",
            result.summary.total,
            result.summary.matched,
            result.summary.mismatched,
            result.summary.match_rate
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::VerifyResult;

    fn build_summary() -> BuildSummary {
        BuildSummary {
            artifact_path: "catalog.json".to_string(),
            counts: GroupCounts {
                r1_r10: 20,
                r11_r14: 16,
                r15_r20: 21,
                r21_r23: 12,
                total: 69,
            },
            unresolved: vec!["R1 high".to_string()],
        }
    }

    #[test]
    fn test_render_build_summary_line() {
        let line = render_build(&build_summary(), OutputFormat::Summary).unwrap();
        assert_eq!(line, "69 records (1 unresolved) -> catalog.json");
    }

    #[test]
    fn test_render_build_md_lists_groups() {
        let md = render_build(&build_summary(), OutputFormat::Md).unwrap();
        assert!(md.contains("| R1-R10 | 20 |"));
        assert!(md.contains("| total | 69 |"));
        assert!(md.contains("- R1 high"));
    }

    #[test]
    fn test_render_build_json_round_trips() {
        let json = render_build(&build_summary(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["counts"]["total"], 69);
        assert_eq!(value["unresolved"][0], "R1 high");
    }

    #[test]
    fn test_render_verify_zero_comparisons() {
        let result = VerifyResult::empty_with_errors(vec!["cannot read catalog".to_string()]);

        let line = render_verify(&result, OutputFormat::Summary).unwrap();
        assert_eq!(line, "0 comparisons: 0 matched, 0 mismatched (0.0%)");

        let md = render_verify(&result, OutputFormat::Md).unwrap();
        assert!(md.contains("cannot read catalog"));
    }
}
