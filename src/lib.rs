//! Energy Usage Library
//!
//! Analysis of a monthly electricity-consumption series: descriptive
//! statistics, a three-month moving-average forecast and an estimated next
//! bill, rendered as a terminal report with a bar chart or as JSON.
//!
//! ## Architecture Overview
//!
//! - [`models`] - Consumption records, series, unit price and results
//! - [`stats`] - Mean, median, sample standard deviation and rounding helpers
//! - [`analyzer`] - The pure [`analyze`] function
//! - [`input`] - Command-line records, JSON series files and the interactive form
//! - [`display`] - Terminal report, text bar chart and JSON output
//! - [`config`] - Configuration with TOML file and environment variable support
//! - [`logging`] - Structured logging with JSON and pretty-print formats
//! - [`commands`] - The `analyze` and `interactive` command flows
//! - [`error`] - [`AnalysisError`] taxonomy
//!
//! ## Main Entry Point
//!
//! ```rust
//! use energy_usage::{analyze, ConsumptionRecord, ConsumptionSeries, UnitPrice};
//!
//! # fn example() -> anyhow::Result<()> {
//! let series: ConsumptionSeries = vec![
//!     ConsumptionRecord::new("Jan/2024", 100.0)?,
//!     ConsumptionRecord::new("Feb/2024", 120.0)?,
//!     ConsumptionRecord::new("Mar/2024", 110.0)?,
//! ]
//! .into();
//!
//! let report = analyze(&series, UnitPrice::new(0.80)?)?.report();
//! println!("Next bill: {:.2}", report.estimated_next_cost);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod stats;

pub use analyzer::analyze;
pub use error::{AnalysisError, EnergyResult};
pub use models::*;
