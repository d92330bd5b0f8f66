//! SVG bar charts
//!
//! Standalone SVG documents, one bar per configuration in report order.
//! Output contains no timestamps, so identical reports give identical files.

use super::format_number;
use crate::models::ComparisonReport;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 360.0;
const MARGIN_TOP: f64 = 56.0;
const MARGIN_BOTTOM: f64 = 48.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 24.0;
const BAR_FILL: f64 = 0.6;

/// Bar colors, cycled per bar
const PALETTE: &[&str] = &["#4c72b0", "#55a868", "#c44e52", "#8172b2"];

/// A single-series bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
}

impl BarChart {
    pub fn new(title: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            y_label: y_label.into(),
            bars: Vec::new(),
        }
    }

    pub fn bar(mut self, label: impl Into<String>, value: f64) -> Self {
        self.bars.push((label.into(), value));
        self
    }

    /// Render as a standalone SVG document
    pub fn render_svg(&self) -> String {
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline_y = MARGIN_TOP + plot_h;

        let max = self
            .bars
            .iter()
            .map(|(_, v)| *v)
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        let scale = if max > 0.0 { plot_h / max } else { 0.0 };

        let mut svg = String::new();
        svg.push_str(&format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">
<rect width="{w}" height="{h}" fill="#ffffff"/>
<text x="{cx}" y="28" text-anchor="middle" font-size="16" font-weight="bold">{title}</text>
<text x="16" y="{cy}" text-anchor="middle" font-size="12" transform="rotate(-90 16 {cy})">{y_label}</text>
"##,
            w = WIDTH,
            h = HEIGHT,
            cx = WIDTH / 2.0,
            cy = MARGIN_TOP + plot_h / 2.0,
            title = escape_xml(&self.title),
            y_label = escape_xml(&self.y_label),
        ));

        // Axes
        svg.push_str(&format!(
            "<line x1=\"{x}\" y1=\"{top}\" x2=\"{x}\" y2=\"{bottom}\" stroke=\"#333333\"/>\n",
            x = MARGIN_LEFT,
            top = MARGIN_TOP,
            bottom = baseline_y,
        ));
        svg.push_str(&format!(
            "<line x1=\"{left}\" y1=\"{y}\" x2=\"{right}\" y2=\"{y}\" stroke=\"#333333\"/>\n",
            left = MARGIN_LEFT,
            right = MARGIN_LEFT + plot_w,
            y = baseline_y,
        ));

        if !self.bars.is_empty() {
            let slot = plot_w / self.bars.len() as f64;
            let bar_w = slot * BAR_FILL;
            for (i, (label, value)) in self.bars.iter().enumerate() {
                let bar_h = if value.is_finite() { value.max(0.0) * scale } else { 0.0 };
                let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
                let y = baseline_y - bar_h;
                let center = x + bar_w / 2.0;
                svg.push_str(&format!(
                    "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>\n",
                    x,
                    y,
                    bar_w,
                    bar_h,
                    PALETTE[i % PALETTE.len()]
                ));
                svg.push_str(&format!(
                    "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\">{}</text>\n",
                    center,
                    y - 6.0,
                    escape_xml(&format_number(*value))
                ));
                svg.push_str(&format!(
                    "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\">{}</text>\n",
                    center,
                    baseline_y + 20.0,
                    escape_xml(label)
                ));
            }
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Total estimated cost by configuration
pub fn cost_chart(report: &ComparisonReport) -> BarChart {
    report.results.iter().fold(
        BarChart::new(
            format!("Total Estimated Cost ({} turbines)", report.turbines),
            "Total Estimated Cost (M USD)",
        ),
        |chart, r| chart.bar(r.configuration.to_string(), r.total_cost),
    )
}

/// Seabed footprint by configuration
pub fn footprint_chart(report: &ComparisonReport) -> BarChart {
    report.results.iter().fold(
        BarChart::new(
            format!("Seabed Footprint ({} turbines)", report.turbines),
            "Seabed Footprint (m²)",
        ),
        |chart, r| chart.bar(r.configuration.to_string(), r.seabed_footprint),
    )
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
