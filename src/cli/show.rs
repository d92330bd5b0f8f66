//! Show command - print the effective configurations

use super::compare::resolve_config;
use crate::scoring::validate_for_run;
use anyhow::Result;
use console::style;
use std::path::Path;

pub fn run(project_dir: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let project = resolve_config(project_dir, config)?;
    let configs = project.configurations();
    for config in &configs {
        validate_for_run(config, project.turbines())?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&configs)?);
        return Ok(());
    }

    println!(
        "\n{}  {}",
        style("Effective configurations").bold(),
        style(format!("({} turbines)", project.turbines())).dim()
    );
    for config in &configs {
        println!("\n{}", style(config.label).cyan().bold());
        println!("  Lines per turbine:        {}", config.lines_per_turbine);
        println!("  Anchors per turbine:      {}", config.anchors_per_turbine);
        println!("  Cost per unit (M USD):    {}", config.estimated_cost_per_unit);
        println!("  Material efficiency:      {}", config.material_efficiency);
        println!("  Installation complexity:  {}", config.installation_complexity);
        println!(
            "  Dynamic coupling:         {}",
            if config.dynamic_coupling { "Yes" } else { "No" }
        );
        println!("  Failure resilience:       {}", config.failure_resilience);
    }
    println!();
    Ok(())
}
