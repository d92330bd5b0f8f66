//! Text (terminal) reporter with colors and formatting

use super::{row_cells, COLUMNS};
use crate::models::ComparisonReport;
use anyhow::Result;
use console::{style, StyledObject};

/// Risk colors: green for low, yellow for mid, red for high
fn risk_style(cell: String, risk: u8) -> StyledObject<String> {
    match risk {
        1 | 2 => style(cell).green(),
        3 => style(cell).yellow(),
        _ => style(cell).red(),
    }
}

/// Render report as an aligned terminal table
pub fn render(report: &ComparisonReport) -> Result<String> {
    let rows: Vec<[String; 11]> = report.results.iter().map(row_cells).collect();

    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    out.push_str(&format!(
        "\n{}  {}\n",
        style("Mooring Configuration Comparison").bold(),
        style(format!("({} turbines)", report.turbines)).dim()
    ));

    let header: Vec<String> = COLUMNS
        .iter()
        .zip(&widths)
        .map(|(h, &w)| pad(h, w))
        .collect();
    out.push_str(&format!("{}\n", style(header.join("  ")).bold()));

    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&format!("{}\n", style("─".repeat(rule_len)).dim()));

    for (result, row) in report.results.iter().zip(&rows) {
        let last = row.len() - 1;
        let mut cells: Vec<String> = Vec::with_capacity(row.len());
        for (i, cell) in row.iter().enumerate() {
            let padded = pad(cell, widths[i]);
            let styled = if i == 0 {
                style(padded).cyan().to_string()
            } else if i == last {
                risk_style(padded, result.risk_index).to_string()
            } else {
                padded
            };
            cells.push(styled);
        }
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    Ok(out)
}

/// Left-align to `width` display characters
fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
}
