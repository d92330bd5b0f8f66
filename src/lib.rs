//! moorcompare - Baseline vs shared mooring comparison
//!
//! A back-of-envelope calculator for floating offshore wind farms. Two
//! mooring layouts are validated, scored with closed-form estimates
//! (cost, seabed footprint, coupling penalty, risk index) and reported as a
//! table, a CSV file and two SVG bar charts.
//!
//! ```
//! use moorcompare::models::MooringConfiguration;
//! use moorcompare::scoring::evaluate_all;
//!
//! let configs = [MooringConfiguration::baseline(), MooringConfiguration::shared()];
//! let results = evaluate_all(&configs, 10).unwrap();
//! assert_eq!(results[0].total_cost, 30.0);
//! assert_eq!(results[1].risk_index, 2);
//! ```

pub mod cli;
pub mod config;
pub mod models;
pub mod reporters;
pub mod scoring;
