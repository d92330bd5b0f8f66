//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates a comparison table suitable for README files, pull request
//! comments, or design notes.

use super::{row_cells, COLUMNS};
use crate::models::{ComparisonReport, Layout};
use anyhow::Result;
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &ComparisonReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');
    md.push_str(&render_table(report));
    md.push('\n');
    md.push_str(&render_takeaways(report));
    md.push_str(&render_footer());

    Ok(md)
}

fn render_header(report: &ComparisonReport) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        "# Mooring Configuration Comparison\n\n**Turbines: {}**\n\nGenerated: {}\n",
        report.turbines, timestamp
    )
}

fn render_table(report: &ComparisonReport) -> String {
    let mut md = String::new();
    md.push_str(&format!("| {} |\n", COLUMNS.join(" | ")));
    md.push_str(&format!("|{}\n", "---|".repeat(COLUMNS.len())));
    for result in &report.results {
        let cells: Vec<String> = row_cells(result)
            .iter()
            .map(|c| c.replace('|', "\\|"))
            .collect();
        md.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    md
}

/// Short deltas of shared vs baseline, when both are present
fn render_takeaways(report: &ComparisonReport) -> String {
    let (Some(baseline), Some(shared)) = (report.get(Layout::Baseline), report.get(Layout::Shared))
    else {
        return String::new();
    };

    let mut md = String::from("## Shared vs Baseline\n\n");
    md.push_str(&format!(
        "- Cost: {:+.2} M USD\n",
        shared.total_cost - baseline.total_cost
    ));
    md.push_str(&format!(
        "- Seabed footprint: {:+.2} m²\n",
        shared.seabed_footprint - baseline.seabed_footprint
    ));
    md.push_str(&format!(
        "- Risk index: {} → {}\n\n",
        baseline.risk_index, shared.risk_index
    ));
    md
}

fn render_footer() -> String {
    format!(
        "---\n\n*Generated by moorcompare v{}*\n",
        env!("CARGO_PKG_VERSION")
    )
}
