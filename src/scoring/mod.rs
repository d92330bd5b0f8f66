//! Mooring layout scoring
//!
//! Turns a validated [`MooringConfiguration`] and a turbine count into an
//! [`EvaluationResult`]. Everything in here is a pure function of its
//! arguments.
//!
//! # Formulas
//!
//! ```text
//! Total Cost       = cost_per_unit × turbines                 (M USD, 2 dp)
//! Seabed Footprint = anchors_per_turbine × turbines × 20      (m², 2 dp)
//! Coupling Penalty = 0.3 if dynamically coupled, else 0.0
//! Risk Index       = clamp(3 - [resilience = High] + [complexity = High], 1, 5)
//! ```
//!
//! # Pipeline
//!
//! 1. [`validate_for_run`] every configuration against the turbine count
//!    (fail fast, nothing is summarized if any configuration is invalid)
//! 2. [`summarize`] each configuration in input order
//!
//! [`evaluate_all`] runs both steps.
//!
//! [`MooringConfiguration`]: crate::models::MooringConfiguration
//! [`EvaluationResult`]: crate::models::EvaluationResult

mod metrics;
mod summarizer;
mod validator;

pub use metrics::{
    coupling_penalty, risk_index, round2, seabed_footprint, total_cost, COUPLING_PENALTY,
    FOOTPRINT_PER_ANCHOR_M2, HIGH_LEVEL, RISK_BASE, RISK_MAX, RISK_MIN,
};
pub use summarizer::{evaluate_all, summarize};
pub use validator::{validate, validate_for_run};

use crate::models::Layout;
use thiserror::Error;

/// Errors raised while evaluating configurations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Invalid {label} configuration: {reason}")]
    ConfigurationInvalid { label: Layout, reason: String },
}

impl EvaluationError {
    pub(crate) fn invalid(label: Layout, reason: impl Into<String>) -> Self {
        EvaluationError::ConfigurationInvalid {
            label,
            reason: reason.into(),
        }
    }
}

pub type EvalResult<T> = Result<T, EvaluationError>;
