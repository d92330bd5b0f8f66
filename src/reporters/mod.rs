//! Output reporters for moorcompare results
//!
//! Supports multiple output formats:
//! - `text` - Aligned terminal table with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown table
//! - `csv` - Comparison table as CSV (also written to the output directory)
//!
//! Bar charts live in [`chart`].

pub mod chart;
mod csv;
mod json;
mod markdown;
mod text;

use crate::models::{ComparisonReport, EvaluationResult};
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Column headers shared by every tabular reporter
pub const COLUMNS: [&str; 11] = [
    "Configuration",
    "Lines/Turbine",
    "Anchors/Turbine",
    "Material Efficiency",
    "Installation Complexity",
    "Dynamic Coupling",
    "Failure Resilience",
    "Total Estimated Cost (M USD)",
    "Seabed Footprint (m²)",
    "Coupling Penalty",
    "Risk Index (1-5)",
];

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown, csv",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render a comparison report using an OutputFormat enum
pub fn report_with_format(report: &ComparisonReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render(report),
        OutputFormat::Csv => csv::render(report),
    }
}

/// Format a number the way the table shows it: always at least one
/// decimal place (`3.0`, `0.3`, `600.0`)
pub(crate) fn format_number(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') && !s.contains('e') {
        format!("{s}.0")
    } else {
        s
    }
}

/// One result as display cells, in [`COLUMNS`] order
pub(crate) fn row_cells(result: &EvaluationResult) -> [String; 11] {
    [
        result.configuration.to_string(),
        format_number(result.lines_per_turbine),
        format_number(result.anchors_per_turbine),
        result.material_efficiency.clone(),
        result.installation_complexity.clone(),
        result.dynamic_coupling.clone(),
        result.failure_resilience.clone(),
        format_number(result.total_cost),
        format_number(result.seabed_footprint),
        format_number(result.coupling_penalty),
        result.risk_index.to_string(),
    ]
}
