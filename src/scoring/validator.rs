//! Configuration validation

use super::{seabed_footprint, total_cost, EvalResult, EvaluationError};
use crate::models::MooringConfiguration;
use tracing::{debug, warn};

/// Levels the risk formula was written against. Anything else is accepted
/// but treated like a non-"High" level.
const KNOWN_LEVELS: &[&str] = &["Low", "Medium", "Moderate", "High"];

/// Check that a configuration can be fed to the metric functions.
///
/// Rejects non-positive or non-finite quantities and empty categorical
/// fields. This is a precondition check: callers must not compute any
/// metric for a configuration that fails here.
pub fn validate(config: &MooringConfiguration) -> EvalResult<()> {
    let label = config.label;

    let quantities = [
        ("lines_per_turbine", config.lines_per_turbine),
        ("anchors_per_turbine", config.anchors_per_turbine),
        ("estimated_cost_per_unit", config.estimated_cost_per_unit),
    ];
    for (field, value) in quantities {
        if !value.is_finite() || value <= 0.0 {
            warn!("{} configuration rejected: {} = {}", label, field, value);
            return Err(EvaluationError::invalid(
                label,
                format!("{field} must be a positive number, got {value}"),
            ));
        }
    }

    let categories = [
        ("material_efficiency", &config.material_efficiency),
        ("installation_complexity", &config.installation_complexity),
        ("failure_resilience", &config.failure_resilience),
    ];
    for (field, value) in categories {
        if value.trim().is_empty() {
            warn!("{} configuration rejected: {} is empty", label, field);
            return Err(EvaluationError::invalid(
                label,
                format!("{field} is required"),
            ));
        }
    }

    for (field, value) in [
        ("installation_complexity", &config.installation_complexity),
        ("failure_resilience", &config.failure_resilience),
    ] {
        if KNOWN_LEVELS.contains(&value.as_str()) {
            continue;
        }
        match KNOWN_LEVELS
            .iter()
            .find(|known| known.eq_ignore_ascii_case(value.trim()))
        {
            Some(known) => warn!(
                "{} {} '{}' does not match '{}' exactly; risk index treats it like a non-High level",
                label, field, value, known
            ),
            None => warn!(
                "{} {} '{}' is not one of {:?}; risk index treats it like a non-High level",
                label, field, value, KNOWN_LEVELS
            ),
        }
    }

    debug!("{} configuration is valid", label);
    Ok(())
}

/// Check a configuration together with the run's turbine count.
///
/// On top of [`validate`], the turbine count must be at least 1 and both
/// farm-level metrics must stay finite. Very large inputs that pass the
/// positivity checks can still overflow once scaled by the farm size.
pub fn validate_for_run(config: &MooringConfiguration, turbines: u32) -> EvalResult<()> {
    validate(config)?;

    let label = config.label;
    if turbines == 0 {
        warn!("{} configuration rejected: turbine count is 0", label);
        return Err(EvaluationError::invalid(
            label,
            "turbine count must be a positive integer, got 0",
        ));
    }

    for (metric, value) in [
        ("total cost", total_cost(config, turbines)),
        ("seabed footprint", seabed_footprint(config, turbines)),
    ] {
        if !value.is_finite() {
            warn!(
                "{} configuration rejected: {} overflows for {} turbines",
                label, metric, turbines
            );
            return Err(EvaluationError::invalid(
                label,
                format!("{metric} is not a finite number for {turbines} turbines"),
            ));
        }
    }

    Ok(())
}
