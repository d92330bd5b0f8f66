//! CLI command definitions and handlers

mod compare;
mod init;
mod show;

pub use compare::{write_artifacts, CompareOptions, Artifacts};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Largest farm the calculator accepts
const MAX_TURBINES: u32 = 10_000;

/// Parse and validate turbine count (1-10000)
fn parse_turbines(s: &str) -> Result<u32, String> {
    let n: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("turbines must be at least 1".to_string())
    } else if n > MAX_TURBINES {
        Err(format!("turbines cannot exceed {}", MAX_TURBINES))
    } else {
        Ok(n)
    }
}

/// moorcompare - Baseline vs shared mooring comparison
///
/// Back-of-envelope calculator for floating offshore wind farms.
#[derive(Parser, Debug)]
#[command(name = "moorcompare")]
#[command(
    version,
    about = "Compare baseline and shared mooring layouts for floating offshore wind: cost, seabed footprint, coupling penalty, risk",
    long_about = "moorcompare evaluates two mooring layouts (baseline: dedicated lines and \
anchors per turbine; shared: lines and anchors shared between neighbours) with simple \
closed-form estimates, prints a comparison table, and writes a CSV plus two SVG bar charts.\n\n\
Run without a subcommand to compare with the built-in presets:\n  \
moorcompare",
    after_help = "\
Examples:
  moorcompare                                   Compare presets, write ./results
  moorcompare compare --turbines 40             Size the farm at 40 turbines
  moorcompare compare --format json             JSON on stdout for scripting
  moorcompare show                              Print the effective configurations
  moorcompare init                              Write an example moorcompare.toml"
)]
pub struct Cli {
    /// Project directory holding moorcompare.toml (default: current directory)
    #[arg(long, short = 'C', global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate both layouts, print the table, write CSV and charts
    #[command(after_help = "\
Examples:
  moorcompare compare                               Defaults: 10 turbines, ./results
  moorcompare compare --turbines 25                 Override the turbine count
  moorcompare compare -o out --no-charts            CSV only, into ./out
  moorcompare compare --format markdown             Markdown table on stdout
  moorcompare compare --config farm.toml            Use an explicit config file")]
    Compare {
        /// Number of turbines in the farm (1-10000, default: 10)
        #[arg(long, short = 't', value_parser = parse_turbines)]
        turbines: Option<u32>,

        /// Directory for the CSV and charts (default: results)
        #[arg(long, short = 'o')]
        output_dir: Option<PathBuf>,

        /// Console format: text, json, markdown (or md), csv
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md", "csv"])]
        format: Option<String>,

        /// Skip writing SVG charts
        #[arg(long)]
        no_charts: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Explicit config file (errors are fatal, unlike auto-discovered files)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },

    /// Show the effective configurations after overrides and validation
    Show {
        /// Explicit config file
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write an example moorcompare.toml into the project directory
    Init,

    /// Show version information
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Compare {
            turbines,
            output_dir,
            format,
            no_charts,
            no_color,
            config,
        }) => compare::run(
            &cli.project_dir,
            CompareOptions {
                turbines,
                output_dir,
                format,
                no_charts,
                no_color,
                config,
            },
        ),

        Some(Commands::Show { config, json }) => {
            show::run(&cli.project_dir, config.as_deref(), json)
        }

        Some(Commands::Init) => init::run(&cli.project_dir),

        Some(Commands::Version) => {
            println!("moorcompare {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        None => compare::run(&cli.project_dir, CompareOptions::default()),
    }
}
