//! Compare command - evaluate both layouts and report

use crate::config::{load_config_file, load_project_config, ProjectConfig};
use crate::models::ComparisonReport;
use crate::reporters::{self, chart, OutputFormat};
use crate::scoring::evaluate_all;
use anyhow::{Context, Result};
use console::style;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// CSV table file name inside the output directory
pub const CSV_FILE: &str = "mooring_comparison.csv";
/// Cost chart file name inside the output directory
pub const COST_CHART_FILE: &str = "cost_comparison.svg";
/// Footprint chart file name inside the output directory
pub const FOOTPRINT_CHART_FILE: &str = "footprint_comparison.svg";

/// Flags of the compare command; `None` means "use config, then default"
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    pub turbines: Option<u32>,
    pub output_dir: Option<PathBuf>,
    pub format: Option<String>,
    pub no_charts: bool,
    pub no_color: bool,
    pub config: Option<PathBuf>,
}

/// Files written for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Artifacts {
    pub csv: PathBuf,
    pub charts: Vec<PathBuf>,
}

/// Run the compare command
pub fn run(project_dir: &Path, opts: CompareOptions) -> Result<()> {
    if opts.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let config = resolve_config(project_dir, opts.config.as_deref())?;

    let turbines = opts.turbines.unwrap_or_else(|| config.turbines());
    if turbines == 0 {
        anyhow::bail!("turbines must be at least 1 (check [run] turbines in the config)");
    }

    let format_name = opts
        .format
        .or_else(|| config.defaults.format.clone())
        .unwrap_or_else(|| "text".to_string());
    let format = OutputFormat::from_str(&format_name)?;

    let output_dir = resolve_output_dir(
        project_dir,
        opts.output_dir.unwrap_or_else(|| config.output_dir()),
    );
    let charts = !opts.no_charts && config.charts_enabled();

    debug!(
        "Comparing with turbines={}, format={}, output_dir={}, charts={}",
        turbines,
        format,
        output_dir.display(),
        charts
    );

    // Results are complete and immutable before anything touches the disk
    let configs = config.configurations();
    let results = evaluate_all(&configs, turbines)?;
    let report = ComparisonReport::new(turbines, results);

    let artifacts = write_artifacts(&report, &output_dir, charts)?;

    print!("{}", reporters::report_with_format(&report, format)?);

    eprintln!();
    eprintln!("{} Saved {}", style("✓").green(), style(artifacts.csv.display()).cyan());
    for path in &artifacts.charts {
        eprintln!("{} Saved {}", style("✓").green(), style(path.display()).cyan());
    }

    Ok(())
}

/// Explicit `--config` wins; otherwise auto-discover. Either way a file
/// that fails to load stops the run.
pub(crate) fn resolve_config(project_dir: &Path, explicit: Option<&Path>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => {
            let config = load_config_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?;
            debug!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => load_project_config(project_dir),
    }
}

/// Relative output directories are taken relative to the project directory
fn resolve_output_dir(project_dir: &Path, output_dir: PathBuf) -> PathBuf {
    if output_dir.is_absolute() {
        output_dir
    } else {
        project_dir.join(output_dir)
    }
}

/// Write the CSV table and (optionally) both bar charts into `output_dir`,
/// creating it if needed.
pub fn write_artifacts(
    report: &ComparisonReport,
    output_dir: &Path,
    charts: bool,
) -> Result<Artifacts> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory {}", output_dir.display())
    })?;

    let csv_path = output_dir.join(CSV_FILE);
    let csv = reporters::report_with_format(report, OutputFormat::Csv)?;
    write_file(&csv_path, &csv)?;

    let mut artifacts = Artifacts {
        csv: csv_path,
        charts: Vec::new(),
    };

    if charts {
        for (name, bar_chart) in [
            (COST_CHART_FILE, chart::cost_chart(report)),
            (FOOTPRINT_CHART_FILE, chart::footprint_chart(report)),
        ] {
            let path = output_dir.join(name);
            write_file(&path, &bar_chart.render_svg())?;
            artifacts.charts.push(path);
        }
    }

    Ok(artifacts)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_write_artifacts_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("results");

        let artifacts = write_artifacts(&test_report(), &out, true).unwrap();

        assert_eq!(artifacts.csv, out.join(CSV_FILE));
        assert_eq!(
            artifacts.charts,
            vec![out.join(COST_CHART_FILE), out.join(FOOTPRINT_CHART_FILE)]
        );
        let csv = std::fs::read_to_string(&artifacts.csv).unwrap();
        assert!(csv.starts_with("Configuration,"));
        let svg = std::fs::read_to_string(out.join(COST_CHART_FILE)).unwrap();
        assert!(svg.contains("Total Estimated Cost"));
    }

    #[test]
    fn test_write_artifacts_without_charts() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = write_artifacts(&test_report(), dir.path(), false).unwrap();
        assert!(artifacts.charts.is_empty());
        assert!(!dir.path().join(COST_CHART_FILE).exists());
    }

    #[test]
    fn test_write_artifacts_is_byte_identical_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let report = test_report();

        write_artifacts(&report, dir.path(), true).unwrap();
        let first_csv = std::fs::read(dir.path().join(CSV_FILE)).unwrap();
        let first_svg = std::fs::read(dir.path().join(FOOTPRINT_CHART_FILE)).unwrap();

        write_artifacts(&report, dir.path(), true).unwrap();
        assert_eq!(first_csv, std::fs::read(dir.path().join(CSV_FILE)).unwrap());
        assert_eq!(
            first_svg,
            std::fs::read(dir.path().join(FOOTPRINT_CHART_FILE)).unwrap()
        );
    }

    #[test]
    fn test_write_artifacts_reports_unwritable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let err = write_artifacts(&test_report(), &blocker.join("out"), true).unwrap_err();
        assert!(err.to_string().contains("Failed to create output directory"));
    }

    #[test]
    fn test_resolve_output_dir() {
        let project = Path::new("/farm");
        assert_eq!(
            resolve_output_dir(project, PathBuf::from("results")),
            PathBuf::from("/farm/results")
        );
        assert_eq!(
            resolve_output_dir(project, PathBuf::from("/tmp/out")),
            PathBuf::from("/tmp/out")
        );
    }

    #[test]
    fn test_resolve_config_explicit_errors_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[run\n").unwrap();
        let err = resolve_config(dir.path(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_resolve_config_discovered_errors_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("moorcompare.toml"), "[run\n").unwrap();
        let err = resolve_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("moorcompare.toml"));
    }

    #[test]
    fn test_resolve_config_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolve_config(dir.path(), None).unwrap();
        assert_eq!(config, ProjectConfig::default());
    }
}
