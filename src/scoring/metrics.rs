//! Metric functions
//!
//! All four metrics are total over configurations accepted by
//! [`validate`](super::validate).

use crate::models::MooringConfiguration;

/// Seabed area disturbed per anchor, in m²
pub const FOOTPRINT_PER_ANCHOR_M2: f64 = 20.0;

/// Penalty applied when turbines are dynamically coupled through shared lines
pub const COUPLING_PENALTY: f64 = 0.3;

pub const RISK_BASE: i32 = 3;
pub const RISK_MIN: i32 = 1;
pub const RISK_MAX: i32 = 5;

/// Level name that triggers a risk adjustment. Matched exactly.
pub const HIGH_LEVEL: &str = "High";

/// Round to 2 decimal places, ties away from zero (`f64::round`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total estimated cost for the farm in million USD
pub fn total_cost(config: &MooringConfiguration, turbines: u32) -> f64 {
    round2(config.estimated_cost_per_unit * f64::from(turbines))
}

/// Disturbed seabed area for the farm in m²
pub fn seabed_footprint(config: &MooringConfiguration, turbines: u32) -> f64 {
    round2(config.anchors_per_turbine * f64::from(turbines) * FOOTPRINT_PER_ANCHOR_M2)
}

/// Flat step: no scaling with line count or number of coupled turbines
pub fn coupling_penalty(config: &MooringConfiguration) -> f64 {
    if config.dynamic_coupling {
        COUPLING_PENALTY
    } else {
        0.0
    }
}

/// Risk score from 1 (lowest) to 5 (highest).
///
/// Only "High" moves the score; every other level (Medium, Moderate, Low, ...)
/// leaves the base value untouched. Matching is exact, so "high" is neutral.
pub fn risk_index(config: &MooringConfiguration) -> u8 {
    let mut risk = RISK_BASE;
    if is_high(&config.failure_resilience) {
        risk -= 1;
    }
    if is_high(&config.installation_complexity) {
        risk += 1;
    }
    // clamp keeps the result in 1..=5, so the cast is lossless
    risk.clamp(RISK_MIN, RISK_MAX) as u8
}

fn is_high(level: &str) -> bool {
    level == HIGH_LEVEL
}
