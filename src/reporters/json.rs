//! JSON reporter
//!
//! Outputs the full ComparisonReport as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::ComparisonReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &ComparisonReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["turbines"], 10);
        let results = parsed["results"].as_array().expect("results array");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["configuration"], "Baseline");
        assert_eq!(results[1]["coupling_penalty"], 0.3);
        assert_eq!(results[1]["risk_index"], 2);
    }

    #[test]
    fn test_json_parses_back() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: ComparisonReport = serde_json::from_str(&json_str).expect("parse report");
        assert_eq!(parsed, report);
    }
}
