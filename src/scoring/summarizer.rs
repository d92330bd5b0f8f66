//! Builds one flat result record per configuration

use super::{
    coupling_penalty, risk_index, seabed_footprint, total_cost, validate_for_run, EvalResult,
};
use crate::models::{EvaluationResult, MooringConfiguration};
use tracing::{debug, info};

/// Summarize a single configuration that has already been validated.
pub fn summarize(config: &MooringConfiguration, turbines: u32) -> EvaluationResult {
    let result = EvaluationResult {
        configuration: config.label,
        lines_per_turbine: config.lines_per_turbine,
        anchors_per_turbine: config.anchors_per_turbine,
        material_efficiency: config.material_efficiency.clone(),
        installation_complexity: config.installation_complexity.clone(),
        dynamic_coupling: if config.dynamic_coupling { "Yes" } else { "No" }.to_string(),
        failure_resilience: config.failure_resilience.clone(),
        total_cost: total_cost(config, turbines),
        seabed_footprint: seabed_footprint(config, turbines),
        coupling_penalty: coupling_penalty(config),
        risk_index: risk_index(config),
    };
    debug!(
        "{}: cost={} footprint={} penalty={} risk={}",
        result.configuration,
        result.total_cost,
        result.seabed_footprint,
        result.coupling_penalty,
        result.risk_index
    );
    result
}

/// Validate every configuration, then summarize them in input order.
///
/// Validation runs over the whole slice before anything is summarized, so
/// an invalid configuration anywhere means no results at all. A turbine
/// count of 0 fails validation.
pub fn evaluate_all(
    configs: &[MooringConfiguration],
    turbines: u32,
) -> EvalResult<Vec<EvaluationResult>> {
    for config in configs {
        validate_for_run(config, turbines)?;
    }

    let results: Vec<EvaluationResult> = configs
        .iter()
        .map(|config| summarize(config, turbines))
        .collect();

    info!(
        "Evaluated {} configurations for {} turbines",
        results.len(),
        turbines
    );
    Ok(results)
}
