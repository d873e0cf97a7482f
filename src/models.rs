//! Core Data Models
//!
//! This module defines the data structures that flow through a consumption
//! analysis run, from user-entered records to the rounded report.
//!
//! ## Data Flow
//!
//! 1. **Raw Data**: [`ConsumptionRecord`] - One month's reported usage in kWh
//! 2. **Input**: [`ConsumptionSeries`] + [`UnitPrice`] - Assembled once per request
//! 3. **Analysis**: [`AnalysisResult`] - Full-precision statistics and forecast
//! 4. **Output**: [`AnalysisReport`] - Two-decimal view for tables and JSON
//!
//! Records and prices validate on construction, so a series that reaches the
//! analyzer never holds negative or non-finite values. Series order is entry
//! order and is never re-sorted.

use crate::error::{AnalysisError, EnergyResult};
use crate::stats::round2;
use serde::{Deserialize, Serialize};

/// One month's reported electricity usage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumptionRecord {
    period: String,
    consumption_kwh: f64,
}

impl ConsumptionRecord {
    pub fn new(period: impl Into<String>, consumption_kwh: f64) -> EnergyResult<Self> {
        ensure_non_negative("consumption_kwh", consumption_kwh)?;
        Ok(Self {
            period: period.into(),
            consumption_kwh,
        })
    }

    /// Builds the `"Month/Year"` label used by the interactive form.
    pub fn from_month_year(month: &str, year: i32, consumption_kwh: f64) -> EnergyResult<Self> {
        Self::new(format!("{}/{}", month.trim(), year), consumption_kwh)
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn consumption_kwh(&self) -> f64 {
        self.consumption_kwh
    }
}

/// Ordered consumption records, in the order the user entered them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConsumptionSeries {
    records: Vec<ConsumptionRecord>,
}

impl ConsumptionSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ConsumptionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ConsumptionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.consumption_kwh).collect()
    }
}

impl From<Vec<ConsumptionRecord>> for ConsumptionSeries {
    fn from(records: Vec<ConsumptionRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<ConsumptionRecord> for ConsumptionSeries {
    fn from_iter<I: IntoIterator<Item = ConsumptionRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Price per kWh in the caller's currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitPrice(f64);

impl UnitPrice {
    pub fn new(value: f64) -> EnergyResult<Self> {
        ensure_non_negative("unit_price", value)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Statistics, forecast and cost for one series, kept at full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    pub mean: f64,
    pub median: f64,
    pub max: f64,
    pub min: f64,
    pub stddev: f64,
    pub range: f64,
    pub daily_average: f64,
    pub forecast_next_month: f64,
    pub estimated_next_cost: f64,
}

impl AnalysisResult {
    /// Rounds every figure to two decimals for presentation.
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport {
            mean_kwh: round2(self.mean),
            median_kwh: round2(self.median),
            max_kwh: round2(self.max),
            min_kwh: round2(self.min),
            stddev_kwh: round2(self.stddev),
            range_kwh: round2(self.range),
            daily_average_kwh: round2(self.daily_average),
            forecast_next_month_kwh: round2(self.forecast_next_month),
            estimated_next_cost: round2(self.estimated_next_cost),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub mean_kwh: f64,
    pub median_kwh: f64,
    pub max_kwh: f64,
    pub min_kwh: f64,
    pub stddev_kwh: f64,
    pub range_kwh: f64,
    pub daily_average_kwh: f64,
    pub forecast_next_month_kwh: f64,
    pub estimated_next_cost: f64,
}

fn ensure_non_negative(field: &'static str, value: f64) -> EnergyResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AnalysisError::InvalidValue { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_rejects_negative_consumption() {
        let err = ConsumptionRecord::new("Jan/2024", -1.0).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidValue { field: "consumption_kwh", .. }
        ));
    }

    #[test]
    fn test_record_rejects_nan() {
        assert!(ConsumptionRecord::new("Jan/2024", f64::NAN).is_err());
    }

    #[test]
    fn test_from_month_year_label() {
        let record = ConsumptionRecord::from_month_year(" March ", 2024, 210.5).unwrap();
        assert_eq!(record.period(), "March/2024");
        assert_eq!(record.consumption_kwh(), 210.5);
    }

    #[test]
    fn test_zero_is_valid() {
        assert!(ConsumptionRecord::new("Jan/2024", 0.0).is_ok());
        assert_eq!(UnitPrice::new(0.0).unwrap().value(), 0.0);
    }

    #[test]
    fn test_unit_price_rejects_negative() {
        assert!(matches!(
            UnitPrice::new(-0.01),
            Err(AnalysisError::InvalidValue { field: "unit_price", .. })
        ));
    }

    #[test]
    fn test_series_keeps_entry_order() {
        let series: ConsumptionSeries = vec![
            ConsumptionRecord::new("Mar/2024", 3.0).unwrap(),
            ConsumptionRecord::new("Jan/2024", 1.0).unwrap(),
        ]
        .into();
        assert_eq!(series.values(), vec![3.0, 1.0]);
        assert_eq!(series.records()[0].period(), "Mar/2024");
    }
}
