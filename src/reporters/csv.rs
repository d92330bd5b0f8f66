//! CSV reporter
//!
//! One header row followed by one row per configuration, in report order.
//! Fields containing commas, quotes, or line breaks are quoted (RFC 4180).

use super::{row_cells, COLUMNS};
use crate::models::ComparisonReport;
use anyhow::Result;

/// Render report as CSV
pub fn render(report: &ComparisonReport) -> Result<String> {
    let mut out = String::new();
    push_record(&mut out, COLUMNS.iter().copied());
    for result in &report.results {
        let cells = row_cells(result);
        push_record(&mut out, cells.iter().map(String::as_str));
    }
    Ok(out)
}

fn push_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let line: Vec<String> = fields.map(escape_field).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
