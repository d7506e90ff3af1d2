//! Report generator implementation.

use crate::config::ReportConfig;
use crate::error::Result;
use crate::sections::{ComparisonRow, GroupTally, OverviewSection};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use tt_common::Decision;

/// Complete report data structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Generator version.
    pub generator_version: String,
    /// Overview section.
    pub overview: OverviewSection,
    /// Per-family tallies for the accuracy chart.
    pub groups: Vec<GroupTally>,
    /// Per-record detail rows.
    pub comparisons: Vec<ComparisonRow>,
}

impl ReportData {
    pub fn new(
        overview: OverviewSection,
        groups: Vec<GroupTally>,
        comparisons: Vec<ComparisonRow>,
    ) -> Self {
        ReportData {
            generated_at: Utc::now(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            overview,
            groups,
            comparisons,
        }
    }
}

/// Report generator.
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    /// Create a new report generator with configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn default_config() -> Self {
        Self::new(ReportConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Report title.
    pub fn title(&self, _data: &ReportData) -> String {
        self.config
            .title
            .clone()
            .unwrap_or_else(|| "Thrombophilia Threshold Verification Report".to_string())
    }

    /// Generate the full HTML document.
    pub fn generate(&self, data: &ReportData) -> Result<String> {
        let html = self.render_html(data);

        info!(
            bytes = html.len(),
            comparisons = data.comparisons.len(),
            "Report generated"
        );

        Ok(html)
    }

    fn render_html(&self, data: &ReportData) -> String {
        let title = escape(&self.title(data));
        let o = &data.overview;

        let mut html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ font-family: -apple-system, sans-serif; max-width: 1200px; margin: 0 auto; padding: 20px; color: #111827; }}
  h1 {{ color: #2563eb; }}
  .summary {{ background: #f0f9ff; padding: 20px; border-radius: 8px; margin: 20px 0; }}
  .summary-stat {{ display: inline-block; margin-right: 40px; }}
  .stat-value {{ font-size: 2rem; font-weight: bold; color: #2563eb; }}
  table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
  th {{ background: #1e40af; color: white; padding: 12px; text-align: left; }}
  td {{ padding: 10px; border-bottom: 1px solid #e5e7eb; }}
  tr:hover {{ background: #f9fafb; }}
  .match {{ color: #059669; }}
  .mismatch {{ color: #dc2626; font-weight: bold; }}
  .legend {{ margin: 20px 0; padding: 15px; background: #fef3c7; border-radius: 8px; }}
  .warnings {{ margin: 20px 0; padding: 15px; background: #fee2e2; border-radius: 8px; }}
  .chart {{ margin: 20px 0; }}
  .chart-row {{ display: flex; align-items: center; margin: 6px 0; }}
  .chart-label {{ width: 90px; font-weight: bold; }}
  .bar {{ height: 18px; margin-right: 6px; border-radius: 3px; }}
  .bar-match {{ background: #059669; }}
  .bar-mismatch {{ background: #dc2626; }}
  .bar-count {{ font-size: 0.85rem; margin-right: 12px; }}
  footer {{ color: #6b7280; font-size: 0.85rem; margin-top: 40px; }}
</style>
</head>
<body>
<h1>{title}</h1>

<div class="summary">
  <h2>Summary</h2>
  <div class="summary-stat"><div class="stat-value">{total}</div><div>Total Comparisons</div></div>
  <div class="summary-stat"><div class="stat-value">{matched}</div><div>Matches</div></div>
  <div class="summary-stat"><div class="stat-value">{mismatched}</div><div>Mismatches</div></div>
  <div class="summary-stat"><div class="stat-value">{rate:.1}%</div><div>Accuracy</div></div>
</div>

<div class="legend">
  <strong>Note:</strong> This report compares the decision stored in the
  catalog artifact against the reference workbook, alongside the decision
  recomputed from each record's own parameters. Mismatches may indicate
  data entry errors or intentional adjustments.
</div>
"#,
            title = title,
            total = o.total,
            matched = o.matched,
            mismatched = o.mismatched,
            rate = o.match_rate,
        );

        if !o.warnings.is_empty() {
            html.push_str("<div class=\"warnings\"><strong>Warnings:</strong><ul>");
            for warning in &o.warnings {
                html.push_str(&format!("<li>{}</li>", escape(warning)));
            }
            html.push_str("</ul></div>\n");
        }

        html.push_str(&self.render_chart(&data.groups));
        html.push_str(&self.render_table(&data.comparisons));

        html.push_str(&format!(
            "<p>Catalog records loaded: {}</p>\n<p>Reference rows loaded: {}</p>\n",
            o.catalog_records, o.reference_rows
        ));

        html.push_str(&format!(
            "<footer>Generated {} by tt-report {}</footer>\n</body>\n</html>\n",
            data.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            escape(&data.generator_version),
        ));

        html
    }

    fn render_chart(&self, groups: &[GroupTally]) -> String {
        if groups.is_empty() {
            return String::new();
        }

        // Scale bars against the largest family so widths stay comparable.
        let max = groups.iter().map(GroupTally::total).max().unwrap_or(1).max(1);

        let mut out = String::from("<h2>Results by Group</h2>\n<div class=\"chart\">\n");
        for tally in groups {
            let match_pct = 100.0 * tally.matched as f64 / max as f64;
            let mismatch_pct = 100.0 * tally.mismatched as f64 / max as f64;
            out.push_str(&format!(
                concat!(
                    "<div class=\"chart-row\"><div class=\"chart-label\">{group}</div>",
                    "<div class=\"bar bar-match\" style=\"width:{mp:.1}%\"></div>",
                    "<span class=\"bar-count\">{m} match</span>",
                    "<div class=\"bar bar-mismatch\" style=\"width:{mmp:.1}%\"></div>",
                    "<span class=\"bar-count\">{mm} mismatch</span></div>\n"
                ),
                group = tally.group,
                mp = match_pct,
                m = tally.matched,
                mmp = mismatch_pct,
                mm = tally.mismatched,
            ));
        }
        out.push_str("</div>\n");
        out
    }

    fn render_table(&self, comparisons: &[ComparisonRow]) -> String {
        let mut out = String::from(
            r#"<h2>Detailed Comparison</h2>
<table>
<thead><tr>
<th>Catalog Id</th><th>Reference Id</th>
<th>Catalog Decision</th><th>Reference Decision</th><th>Recomputed</th>
<th>Catalog pVTE</th><th>Reference pVTE</th><th>Status</th>
</tr></thead>
<tbody>
"#,
        );

        for row in comparisons {
            if row.ash_matches && !self.config.include_matches {
                continue;
            }

            let (status_class, status_text) = if row.ash_matches {
                ("match", "&#10003; Match")
            } else {
                ("mismatch", "&#10007; Mismatch")
            };

            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.4}</td><td>{}</td><td class=\"{}\">{}</td></tr>\n",
                escape(&row.catalog_id),
                escape(row.reference_id.as_deref().unwrap_or("N/A")),
                row.catalog_decision,
                fmt_decision(row.reference_decision),
                fmt_decision(row.recomputed_decision),
                row.catalog_p_vte,
                row.reference_p_vte
                    .map(|p| format!("{p:.4}"))
                    .unwrap_or_else(|| "N/A".to_string()),
                status_class,
                status_text,
            ));
        }

        out.push_str("</tbody>\n</table>\n");
        out
    }
}

fn fmt_decision(decision: Option<Decision>) -> String {
    decision
        .map(|d| d.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Minimal HTML escaping for text nodes and attribute values.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
