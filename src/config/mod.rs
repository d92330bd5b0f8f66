//! Configuration module for moorcompare
//!
//! This module handles:
//! - Project-level configuration (moorcompare.toml)
//! - Per-layout overrides of the built-in presets
//! - CLI defaults

mod project_config;

pub use project_config::{
    CliDefaults,
    ConfigurationOverride,
    ConfigurationOverrides,
    ProjectConfig,
    RunConfig,
    load_config_file,
    load_project_config,
    CONFIG_FILE_NAMES,
    DEFAULT_OUTPUT_DIR,
    DEFAULT_TURBINES,
    EXAMPLE_CONFIG,
};
