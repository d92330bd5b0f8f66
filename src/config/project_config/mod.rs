//! Project-level configuration support
//!
//! Loads per-project configuration from `moorcompare.toml` or
//! `.moorcomparerc.json` in the project directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # moorcompare.toml
//!
//! [run]
//! turbines = 10
//! output_dir = "results"
//! charts = true
//!
//! [defaults]
//! format = "text"
//!
//! # Any field may be omitted; omitted fields keep the built-in preset value.
//! [configurations.shared]
//! estimated_cost_per_unit = 2.4
//! failure_resilience = "Medium"
//! ```

use crate::models::{Layout, MooringConfiguration};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Turbine count used when neither the CLI nor the config sets one
pub const DEFAULT_TURBINES: u32 = 10;

/// Output directory used when neither the CLI nor the config sets one
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// Config file names, in lookup order
pub const CONFIG_FILE_NAMES: &[&str] = &["moorcompare.toml", ".moorcomparerc.json"];

/// Project-level configuration loaded from moorcompare.toml or similar
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ProjectConfig {
    /// Run parameters
    #[serde(default)]
    pub run: RunConfig,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,

    /// Per-layout overrides on top of the built-in presets
    #[serde(default)]
    pub configurations: ConfigurationOverrides,
}

/// `[run]` section
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct RunConfig {
    /// Number of turbines in the farm (default: 10)
    #[serde(default)]
    pub turbines: Option<u32>,

    /// Directory for the CSV table and charts (default: results)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Whether to write SVG charts (default: true)
    #[serde(default)]
    pub charts: Option<bool>,
}

/// `[defaults]` section
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliDefaults {
    /// Default stdout format (text, json, markdown, csv)
    #[serde(default)]
    pub format: Option<String>,
}

/// `[configurations.*]` tables
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ConfigurationOverrides {
    #[serde(default)]
    pub baseline: Option<ConfigurationOverride>,

    #[serde(default)]
    pub shared: Option<ConfigurationOverride>,
}

impl ConfigurationOverrides {
    pub fn get(&self, layout: Layout) -> Option<&ConfigurationOverride> {
        match layout {
            Layout::Baseline => self.baseline.as_ref(),
            Layout::Shared => self.shared.as_ref(),
        }
    }
}

/// Partial configuration; every field set here replaces the preset value
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationOverride {
    #[serde(default)]
    pub lines_per_turbine: Option<f64>,
    #[serde(default)]
    pub anchors_per_turbine: Option<f64>,
    #[serde(default)]
    pub estimated_cost_per_unit: Option<f64>,
    #[serde(default)]
    pub material_efficiency: Option<String>,
    #[serde(default)]
    pub installation_complexity: Option<String>,
    #[serde(default)]
    pub dynamic_coupling: Option<bool>,
    #[serde(default)]
    pub failure_resilience: Option<String>,
}

impl ConfigurationOverride {
    /// Apply this override on top of `base`
    pub fn apply(&self, base: MooringConfiguration) -> MooringConfiguration {
        MooringConfiguration {
            label: base.label,
            lines_per_turbine: self.lines_per_turbine.unwrap_or(base.lines_per_turbine),
            anchors_per_turbine: self.anchors_per_turbine.unwrap_or(base.anchors_per_turbine),
            estimated_cost_per_unit: self
                .estimated_cost_per_unit
                .unwrap_or(base.estimated_cost_per_unit),
            material_efficiency: self
                .material_efficiency
                .clone()
                .unwrap_or(base.material_efficiency),
            installation_complexity: self
                .installation_complexity
                .clone()
                .unwrap_or(base.installation_complexity),
            dynamic_coupling: self.dynamic_coupling.unwrap_or(base.dynamic_coupling),
            failure_resilience: self
                .failure_resilience
                .clone()
                .unwrap_or(base.failure_resilience),
        }
    }
}

impl ProjectConfig {
    /// Effective turbine count (config > default)
    pub fn turbines(&self) -> u32 {
        self.run.turbines.unwrap_or(DEFAULT_TURBINES)
    }

    /// Effective output directory (config > default)
    pub fn output_dir(&self) -> PathBuf {
        self.run
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Whether charts should be written
    pub fn charts_enabled(&self) -> bool {
        self.run.charts.unwrap_or(true)
    }

    /// The two configurations to compare, in report order, with overrides applied
    pub fn configurations(&self) -> Vec<MooringConfiguration> {
        Layout::ALL
            .iter()
            .map(|&layout| {
                let preset = MooringConfiguration::preset(layout);
                match self.configurations.get(layout) {
                    Some(overrides) => {
                        debug!("Applying [configurations.{}] overrides", layout.key());
                        overrides.apply(preset)
                    }
                    None => preset,
                }
            })
            .collect()
    }
}

/// Load project configuration from a directory
///
/// Searches for config files in order:
/// 1. `moorcompare.toml`
/// 2. `.moorcomparerc.json`
///
/// The first file that exists is used. A file that exists but fails to load
/// is an error; its overrides are never replaced by the presets. Returns the
/// default config when no file exists.
pub fn load_project_config(project_dir: &Path) -> anyhow::Result<ProjectConfig> {
    for name in CONFIG_FILE_NAMES {
        let path = project_dir.join(name);
        if !path.exists() {
            continue;
        }
        let config = load_config_file(&path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
        debug!("Loaded project config from {}", path.display());
        return Ok(config);
    }

    debug!("No project config found, using defaults");
    Ok(ProjectConfig::default())
}

/// Load a specific config file, choosing the parser by extension
/// (`.json` is JSON, anything else is TOML)
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };
    Ok(config)
}

/// Example config written by `moorcompare init`
pub const EXAMPLE_CONFIG: &str = r#"# moorcompare configuration

[run]
# Number of turbines in the farm
turbines = 10

# Where the CSV table and charts are written
output_dir = "results"

# Write SVG bar charts next to the CSV
charts = true

[defaults]
# Console format: text, json, markdown, csv
format = "text"

# Uncomment a field to override the built-in preset value.
[configurations.baseline]
# lines_per_turbine = 3.0
# anchors_per_turbine = 3.0
# estimated_cost_per_unit = 3.0   # million USD per turbine
# material_efficiency = "Medium"
# installation_complexity = "High"
# dynamic_coupling = false
# failure_resilience = "Medium"

[configurations.shared]
# lines_per_turbine = 1.5
# anchors_per_turbine = 1.5
# estimated_cost_per_unit = 2.0
# material_efficiency = "High"
# installation_complexity = "Moderate"
# dynamic_coupling = true
# failure_resilience = "High"
"#;
