//! Consumption Analysis Engine
//!
//! This module turns a [`ConsumptionSeries`] and a [`UnitPrice`] into an
//! [`AnalysisResult`]. It is a pure, one-shot computation: nothing is cached
//! between calls and the same inputs always produce the same output.
//!
//! ## Computed Figures
//!
//! - **Descriptive statistics** over every record: mean, median, max, min,
//!   sample standard deviation (N-1) and range
//! - **Daily average**: mean divided by a fixed 30-day month
//! - **Forecast**: simple moving average of the last [`FORECAST_WINDOW`]
//!   records in entry order
//! - **Estimated cost**: full-precision forecast multiplied by the unit price
//!
//! Rounding happens only when the result is turned into an
//! [`AnalysisReport`](crate::models::AnalysisReport).
//!
//! ## Usage Example
//!
//! ```rust
//! use energy_usage::{analyze, ConsumptionRecord, ConsumptionSeries, UnitPrice};
//!
//! # fn example() -> Result<(), energy_usage::AnalysisError> {
//! let series: ConsumptionSeries = vec![
//!     ConsumptionRecord::new("Jan/2024", 100.0)?,
//!     ConsumptionRecord::new("Feb/2024", 120.0)?,
//!     ConsumptionRecord::new("Mar/2024", 110.0)?,
//! ]
//! .into();
//!
//! let result = analyze(&series, UnitPrice::new(0.80)?)?;
//! assert_eq!(result.report().estimated_next_cost, 88.0);
//! # Ok(())
//! # }
//! ```

use crate::error::{AnalysisError, EnergyResult};
use crate::models::{AnalysisResult, ConsumptionSeries, UnitPrice};
use crate::stats;
use tracing::debug;

/// Smallest series the analyzer accepts.
pub const MIN_RECORDS: usize = 3;

/// Number of trailing records averaged for the next-month forecast.
pub const FORECAST_WINDOW: usize = 3;

/// Fixed month length used for the daily average, regardless of calendar.
pub const DAYS_PER_MONTH: f64 = 30.0;

pub fn analyze(series: &ConsumptionSeries, unit_price: UnitPrice) -> EnergyResult<AnalysisResult> {
    if series.len() < MIN_RECORDS {
        return Err(AnalysisError::InsufficientData {
            found: series.len(),
            required: MIN_RECORDS,
        });
    }

    let values = series.values();
    let insufficient = || AnalysisError::InsufficientData {
        found: values.len(),
        required: MIN_RECORDS,
    };

    let mean = stats::mean(&values).ok_or_else(insufficient)?;
    let median = stats::median(&values).ok_or_else(insufficient)?;
    let (min, max) = stats::min_max(&values).ok_or_else(insufficient)?;
    let stddev = stats::sample_std_dev(&values).ok_or_else(insufficient)?;
    let forecast_next_month =
        stats::trailing_mean(&values, FORECAST_WINDOW).ok_or_else(insufficient)?;

    let result = AnalysisResult {
        mean,
        median,
        max,
        min,
        stddev,
        range: max - min,
        daily_average: mean / DAYS_PER_MONTH,
        forecast_next_month,
        estimated_next_cost: forecast_next_month * unit_price.value(),
    };

    debug!(
        records = values.len(),
        mean = result.mean,
        forecast = result.forecast_next_month,
        "Consumption analysis complete"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConsumptionRecord;

    fn series(values: &[f64]) -> ConsumptionSeries {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| ConsumptionRecord::new(format!("M{}/2024", i + 1), *v).unwrap())
            .collect()
    }

    #[test]
    fn test_reference_scenario() {
        let result = analyze(&series(&[100.0, 120.0, 110.0]), UnitPrice::new(0.80).unwrap())
            .unwrap()
            .report();

        assert_eq!(result.mean_kwh, 110.0);
        assert_eq!(result.median_kwh, 110.0);
        assert_eq!(result.max_kwh, 120.0);
        assert_eq!(result.min_kwh, 100.0);
        assert_eq!(result.stddev_kwh, 10.0);
        assert_eq!(result.range_kwh, 20.0);
        assert_eq!(result.daily_average_kwh, 3.67);
        assert_eq!(result.forecast_next_month_kwh, 110.0);
        assert_eq!(result.estimated_next_cost, 88.0);
    }

    #[test]
    fn test_rejects_short_series() {
        let err = analyze(&series(&[1.0, 2.0]), UnitPrice::new(1.0).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InsufficientData { found: 2, required: 3 }
        ));
    }

    #[test]
    fn test_forecast_uses_last_three_in_entry_order() {
        let result = analyze(
            &series(&[500.0, 10.0, 20.0, 30.0]),
            UnitPrice::new(1.0).unwrap(),
        )
        .unwrap();
        assert_eq!(result.forecast_next_month, 20.0);
        assert_eq!(result.max, 500.0);
    }

    #[test]
    fn test_cost_uses_unrounded_forecast() {
        // forecast = 100.005; rounding first would give 100.01 * 3 = 300.03
        let result = analyze(
            &series(&[100.0, 100.005, 100.01]),
            UnitPrice::new(3.0).unwrap(),
        )
        .unwrap();
        assert!((result.estimated_next_cost - 300.015).abs() < 1e-9);
    }
}
