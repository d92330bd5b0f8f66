//! Core data models for moorcompare
//!
//! These models describe the two mooring layouts being compared and the
//! flat result record produced for each of them.

use serde::{Deserialize, Serialize};

/// Which mooring layout a configuration describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// Independent anchor and line sets per turbine
    Baseline,
    /// Interconnected lines and anchors shared across turbines
    Shared,
}

impl Layout {
    /// Layouts in report order
    pub const ALL: [Layout; 2] = [Layout::Baseline, Layout::Shared];

    /// Key used for this layout in config files (`[configurations.<key>]`)
    pub fn key(&self) -> &'static str {
        match self {
            Layout::Baseline => "baseline",
            Layout::Shared => "shared",
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Baseline => write!(f, "Baseline"),
            Layout::Shared => write!(f, "Shared"),
        }
    }
}

impl std::str::FromStr for Layout {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "baseline" => Ok(Layout::Baseline),
            "shared" => Ok(Layout::Shared),
            _ => Err(anyhow::anyhow!(
                "Unknown layout '{}'. Valid layouts: baseline, shared",
                s
            )),
        }
    }
}

/// Input parameters for one mooring layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MooringConfiguration {
    pub label: Layout,
    pub lines_per_turbine: f64,
    pub anchors_per_turbine: f64,
    /// Cost per turbine in million USD
    pub estimated_cost_per_unit: f64,
    pub material_efficiency: String,
    pub installation_complexity: String,
    pub dynamic_coupling: bool,
    pub failure_resilience: String,
}

impl MooringConfiguration {
    /// Baseline preset: three lines and three dedicated anchors per turbine
    pub fn baseline() -> Self {
        Self {
            label: Layout::Baseline,
            lines_per_turbine: 3.0,
            anchors_per_turbine: 3.0,
            estimated_cost_per_unit: 3.0,
            material_efficiency: "Medium".into(),
            installation_complexity: "High".into(),
            dynamic_coupling: false,
            failure_resilience: "Medium".into(),
        }
    }

    /// Shared preset: neighbouring turbines share lines and anchors
    pub fn shared() -> Self {
        Self {
            label: Layout::Shared,
            lines_per_turbine: 1.5,
            anchors_per_turbine: 1.5,
            estimated_cost_per_unit: 2.0,
            material_efficiency: "High".into(),
            installation_complexity: "Moderate".into(),
            dynamic_coupling: true,
            failure_resilience: "High".into(),
        }
    }

    /// Built-in preset for a layout
    pub fn preset(layout: Layout) -> Self {
        match layout {
            Layout::Baseline => Self::baseline(),
            Layout::Shared => Self::shared(),
        }
    }
}

/// Flat, read-only result record for one configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub configuration: Layout,
    pub lines_per_turbine: f64,
    pub anchors_per_turbine: f64,
    pub material_efficiency: String,
    pub installation_complexity: String,
    /// "Yes" / "No"
    pub dynamic_coupling: String,
    pub failure_resilience: String,
    /// Million USD
    pub total_cost: f64,
    /// Square metres
    pub seabed_footprint: f64,
    pub coupling_penalty: f64,
    /// 1 (lowest risk) to 5 (highest)
    pub risk_index: u8,
}

/// Everything a reporter needs for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub turbines: u32,
    pub results: Vec<EvaluationResult>,
}

impl ComparisonReport {
    pub fn new(turbines: u32, results: Vec<EvaluationResult>) -> Self {
        Self { turbines, results }
    }

    /// Result for a layout, if it was evaluated
    pub fn get(&self, layout: Layout) -> Option<&EvaluationResult> {
        self.results.iter().find(|r| r.configuration == layout)
    }
}
