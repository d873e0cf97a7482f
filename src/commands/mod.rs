//! Command module for consumption analysis
//!
//! This module contains the implementation of the CLI commands supported by
//! energy-usage. Each command assembles a series, runs the analyzer and hands
//! the result to the display layer.

pub mod analyze;
pub mod interactive;

pub use analyze::{run_analyze, AnalyzeOptions};
pub use interactive::run_interactive;
