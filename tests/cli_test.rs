//! CLI contract tests
//!
//! Runs the compiled binary inside isolated temp directories and checks
//! the table on stdout, the files written to the output directory, and
//! the exit code on invalid configurations.

use std::path::Path;
use std::process::Command;

fn moorcompare_bin() -> String {
    env!("CARGO_BIN_EXE_moorcompare").to_string()
}

/// Run with `-C <dir>` and return (exit code, stdout, stderr)
fn run(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(moorcompare_bin())
        .arg("-C")
        .arg(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run moorcompare");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

const EXPECTED_CSV: &str = "\
Configuration,Lines/Turbine,Anchors/Turbine,Material Efficiency,Installation Complexity,Dynamic Coupling,Failure Resilience,Total Estimated Cost (M USD),Seabed Footprint (m²),Coupling Penalty,Risk Index (1-5)
Baseline,3.0,3.0,Medium,High,No,Medium,30.0,600.0,0.0,4
Shared,1.5,1.5,High,Moderate,Yes,High,20.0,300.0,0.3,2
";

// ============================================================================
// Default run
// ============================================================================

#[test]
fn test_default_run_writes_results() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(dir.path(), &[]);
    assert_eq!(code, 0);

    assert!(stdout.contains("Mooring Configuration Comparison"));
    assert!(stdout.contains("(10 turbines)"));
    let baseline = stdout
        .lines()
        .find(|l| l.starts_with("Baseline"))
        .expect("baseline row");
    assert!(baseline.contains("600.0"));

    let results = dir.path().join("results");
    assert_eq!(
        std::fs::read_to_string(results.join("mooring_comparison.csv")).unwrap(),
        EXPECTED_CSV
    );
    assert!(results.join("cost_comparison.svg").exists());
    assert!(results.join("footprint_comparison.svg").exists());
}

#[test]
fn test_compare_csv_stdout_matches_file() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(dir.path(), &["compare", "--format", "csv"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, EXPECTED_CSV);
}

#[test]
fn test_compare_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(dir.path(), &["compare", "-f", "json", "--no-charts"]);
    assert_eq!(code, 0);

    let v: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON on stdout");
    assert_eq!(v["turbines"], 10);
    let results = v["results"].as_array().unwrap();
    assert_eq!(results[0]["configuration"], "Baseline");
    assert_eq!(results[0]["total_cost"], 30.0);
    assert_eq!(results[0]["risk_index"], 4);
    assert_eq!(results[1]["configuration"], "Shared");
    assert_eq!(results[1]["seabed_footprint"], 300.0);
    assert_eq!(results[1]["coupling_penalty"], 0.3);
    assert_eq!(results[1]["dynamic_coupling"], "Yes");

    assert!(!dir.path().join("results/cost_comparison.svg").exists());
}

#[test]
fn test_turbines_flag_scales_metrics() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(dir.path(), &["compare", "--turbines", "40", "-f", "csv"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Baseline,3.0,3.0,Medium,High,No,Medium,120.0,2400.0,0.0,4"));
    assert!(stdout.contains("Shared,1.5,1.5,High,Moderate,Yes,High,80.0,1200.0,0.3,2"));
}

#[test]
fn test_zero_turbines_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run(dir.path(), &["compare", "--turbines", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("turbines must be at least 1"));
}

#[test]
fn test_custom_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run(dir.path(), &["compare", "-o", "out/run1", "--no-charts"]);
    assert_eq!(code, 0);
    assert!(dir.path().join("out/run1/mooring_comparison.csv").exists());
    assert!(!dir.path().join("results").exists());
}

#[test]
fn test_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("results/mooring_comparison.csv");
    let svg = dir.path().join("results/cost_comparison.svg");

    assert_eq!(run(dir.path(), &["compare"]).0, 0);
    let first = (std::fs::read(&csv).unwrap(), std::fs::read(&svg).unwrap());

    assert_eq!(run(dir.path(), &["compare"]).0, 0);
    let second = (std::fs::read(&csv).unwrap(), std::fs::read(&svg).unwrap());

    assert_eq!(first, second);
}

// ============================================================================
// Project config
// ============================================================================

#[test]
fn test_project_config_overrides() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("moorcompare.toml"),
        r#"
[run]
turbines = 20
output_dir = "farm-out"

[defaults]
format = "csv"

[configurations.shared]
installation_complexity = "High"
dynamic_coupling = false
"#,
    )
    .unwrap();

    let (code, stdout, _) = run(dir.path(), &["compare"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Baseline,3.0,3.0,Medium,High,No,Medium,60.0,1200.0,0.0,4"));
    assert!(stdout.contains("Shared,1.5,1.5,High,High,No,High,40.0,600.0,0.0,3"));
    assert!(dir.path().join("farm-out/mooring_comparison.csv").exists());
}

#[test]
fn test_cli_flags_override_project_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("moorcompare.toml"), "[run]\nturbines = 20\n").unwrap();

    let (code, stdout, _) = run(dir.path(), &["compare", "-t", "1", "-f", "csv"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Baseline,3.0,3.0,Medium,High,No,Medium,3.0,60.0,0.0,4"));
}

#[test]
fn test_invalid_configuration_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("moorcompare.toml"),
        "[configurations.baseline]\nlines_per_turbine = 0\n",
    )
    .unwrap();

    let (code, stdout, stderr) = run(dir.path(), &["compare"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid Baseline configuration"));
    assert!(stderr.contains("lines_per_turbine"));
    assert!(!dir.path().join("results").exists());
}

#[test]
fn test_explicit_broken_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("farm.toml");
    std::fs::write(&path, "[run\nturbines = 3\n").unwrap();

    let (code, _, stderr) = run(dir.path(), &["compare", "--config", path.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Failed to load config file"));
}

#[test]
fn test_discovered_broken_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("moorcompare.toml"),
        "[configurations.shared]\nestimated_cost_per_unit = 9.0\nanchors = 4.0\n",
    )
    .unwrap();

    let (code, stdout, stderr) = run(dir.path(), &["compare", "-f", "csv"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Failed to load config file"));
    assert!(stderr.contains("anchors"));
    assert!(!dir.path().join("results").exists());
}

#[test]
fn test_show_with_broken_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".moorcomparerc.json"), "{ not json").unwrap();

    let (code, stdout, _) = run(dir.path(), &["show"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
}

// ============================================================================
// Other commands
// ============================================================================

#[test]
fn test_init_then_compare() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run(dir.path(), &["init"]);
    assert_eq!(code, 0);
    assert!(dir.path().join("moorcompare.toml").exists());

    let (code, stdout, _) = run(dir.path(), &["compare", "-f", "csv"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, EXPECTED_CSV);
}

#[test]
fn test_show_json() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(dir.path(), &["show", "--json"]);
    assert_eq!(code, 0);

    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let configs = v.as_array().unwrap();
    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0]["label"], "Baseline");
    assert_eq!(configs[1]["dynamic_coupling"], true);
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(dir.path(), &["version"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("moorcompare "));
}
