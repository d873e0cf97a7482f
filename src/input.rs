//! Input collection
//!
//! Three ways to assemble a [`ConsumptionSeries`]:
//!
//! - `--record PERIOD=KWH` command-line values via [`parse_record_arg`]
//! - a JSON series file via [`load_series_file`]
//! - the question-and-answer [`InteractiveForm`]
//!
//! Every path validates values through the model constructors and applies
//! the month-count gates from [`InputConfig`] before anything is analyzed.

use crate::config::InputConfig;
use crate::error::{AnalysisError, EnergyResult};
use crate::models::{ConsumptionRecord, ConsumptionSeries, UnitPrice};
use chrono::Datelike;
use serde::Deserialize;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, warn};

/// JSON series file layout.
#[derive(Debug, Deserialize)]
pub struct SeriesFile {
    #[serde(default)]
    pub unit_price: Option<f64>,
    pub records: Vec<RecordInput>,
}

#[derive(Debug, Deserialize)]
pub struct RecordInput {
    pub period: String,
    pub consumption_kwh: f64,
}

/// Loaded file contents with every record validated.
#[derive(Debug)]
pub struct LoadedSeries {
    pub series: ConsumptionSeries,
    pub unit_price: Option<UnitPrice>,
}

/// Parses `PERIOD=KWH`, splitting on the last `=`.
pub fn parse_record_arg(arg: &str) -> EnergyResult<ConsumptionRecord> {
    let (period, value) = arg.rsplit_once('=').ok_or_else(|| {
        AnalysisError::InvalidInput(format!("expected PERIOD=KWH, got '{}'", arg))
    })?;

    let period = period.trim();
    if period.is_empty() {
        return Err(AnalysisError::InvalidInput(format!(
            "missing period in '{}'",
            arg
        )));
    }

    let kwh: f64 = value.trim().parse().map_err(|_| {
        AnalysisError::InvalidInput(format!("invalid consumption '{}' in '{}'", value.trim(), arg))
    })?;

    ConsumptionRecord::new(period, kwh)
}

pub fn load_series_file(path: &Path) -> EnergyResult<LoadedSeries> {
    let content = std::fs::read_to_string(path)?;
    let file: SeriesFile = serde_json::from_str(&content)?;

    let series = file
        .records
        .into_iter()
        .map(|r| ConsumptionRecord::new(r.period, r.consumption_kwh))
        .collect::<EnergyResult<ConsumptionSeries>>()?;
    let unit_price = file.unit_price.map(UnitPrice::new).transpose()?;

    debug!(
        path = %path.display(),
        records = series.len(),
        "Loaded series file"
    );

    Ok(LoadedSeries { series, unit_price })
}

/// Rejects series outside the configured month range.
pub fn check_record_count(series: &ConsumptionSeries, config: &InputConfig) -> EnergyResult<()> {
    if series.len() < config.min_months {
        return Err(AnalysisError::InsufficientData {
            found: series.len(),
            required: config.min_months,
        });
    }
    if series.len() > config.max_months {
        return Err(AnalysisError::TooManyRecords {
            found: series.len(),
            max: config.max_months,
        });
    }
    Ok(())
}

/// Terminal question-and-answer form that gathers a series and a price.
///
/// `Ok(None)` means the user stopped the flow (too few months, or the price
/// was not confirmed); the warning has already been written.
pub struct InteractiveForm<'a, R, W> {
    reader: R,
    writer: W,
    config: &'a InputConfig,
    currency_symbol: &'a str,
}

impl<'a, R: BufRead, W: Write> InteractiveForm<'a, R, W> {
    pub fn new(reader: R, writer: W, config: &'a InputConfig, currency_symbol: &'a str) -> Self {
        Self {
            reader,
            writer,
            config,
            currency_symbol,
        }
    }

    pub fn collect_series(&mut self) -> EnergyResult<Option<ConsumptionSeries>> {
        let month_count = self.ask_month_count()?;
        if month_count < self.config.min_months {
            self.warn_insufficient()?;
            return Ok(None);
        }

        let mut series = ConsumptionSeries::new();
        for index in 0..month_count {
            writeln!(self.writer, "\n### Month {}", index + 1)?;

            let month = self.ask("Month: ")?;
            let year = self.ask_year()?;
            let consumption = self.ask_non_negative("Consumption (kWh): ")?;

            if month.is_empty() {
                debug!(index, "Skipping month without a label");
                continue;
            }
            series.push(ConsumptionRecord::from_month_year(&month, year, consumption)?);
        }

        if series.len() < self.config.min_months {
            self.warn_insufficient()?;
            return Ok(None);
        }

        Ok(Some(series))
    }

    pub fn collect_unit_price(&mut self) -> EnergyResult<Option<UnitPrice>> {
        let prompt = format!("Price per kWh ({}/kWh): ", self.currency_symbol);
        let price = UnitPrice::new(self.ask_non_negative(&prompt)?)?;

        let answer = self.ask(&format!(
            "Confirm {} {:.2} per kWh? [y/N] ",
            self.currency_symbol,
            price.value()
        ))?;
        if matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            Ok(Some(price))
        } else {
            writeln!(self.writer, "Price not confirmed, analysis cancelled.")?;
            Ok(None)
        }
    }

    fn ask_month_count(&mut self) -> EnergyResult<usize> {
        let prompt = format!(
            "How many months will you enter? (minimum {}, maximum {}): ",
            self.config.min_months, self.config.max_months
        );
        loop {
            let answer = self.ask(&prompt)?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=self.config.max_months).contains(&n) => return Ok(n),
                _ => writeln!(
                    self.writer,
                    "Please enter a whole number between 1 and {}.",
                    self.config.max_months
                )?,
            }
        }
    }

    fn ask_year(&mut self) -> EnergyResult<i32> {
        let (min, max) = (self.config.min_year, self.config.max_year);
        let default_year = chrono::Local::now().year().clamp(min, max);
        let prompt = format!("Year [{}]: ", default_year);
        loop {
            let answer = self.ask(&prompt)?;
            if answer.is_empty() {
                return Ok(default_year);
            }
            match answer.parse::<i32>() {
                Ok(year) if (min..=max).contains(&year) => return Ok(year),
                _ => writeln!(self.writer, "Please enter a year between {} and {}.", min, max)?,
            }
        }
    }

    fn ask_non_negative(&mut self, prompt: &str) -> EnergyResult<f64> {
        loop {
            let answer = self.ask(prompt)?;
            if answer.is_empty() {
                return Ok(0.0);
            }
            match answer.replace(',', ".").parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => return Ok(value),
                _ => writeln!(self.writer, "Please enter a number greater than or equal to 0.")?,
            }
        }
    }

    fn warn_insufficient(&mut self) -> EnergyResult<()> {
        warn!(
            required = self.config.min_months,
            "Interactive input stopped with too few months"
        );
        writeln!(
            self.writer,
            "Insufficient data. At least {} months are required.",
            self.config.min_months
        )?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> EnergyResult<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(AnalysisError::InvalidInput(
                "unexpected end of input".to_string(),
            ));
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_arg() {
        let record = parse_record_arg("Jan/2024=100.5").unwrap();
        assert_eq!(record.period(), "Jan/2024");
        assert_eq!(record.consumption_kwh(), 100.5);
    }

    #[test]
    fn test_parse_record_arg_splits_on_last_equals() {
        let record = parse_record_arg("a=b = 7").unwrap();
        assert_eq!(record.period(), "a=b");
        assert_eq!(record.consumption_kwh(), 7.0);
    }

    #[test]
    fn test_parse_record_arg_errors() {
        assert!(matches!(
            parse_record_arg("Jan/2024"),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_record_arg("=5"),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_record_arg("Jan/2024=lots"),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_record_arg("Jan/2024=-3"),
            Err(AnalysisError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_check_record_count() {
        let config = InputConfig {
            min_months: 3,
            max_months: 3,
            min_year: 2000,
            max_year: 2100,
        };
        let series: ConsumptionSeries = (0..4)
            .map(|i| ConsumptionRecord::new(format!("M{}", i), 1.0).unwrap())
            .collect();
        assert!(matches!(
            check_record_count(&series, &config),
            Err(AnalysisError::TooManyRecords { found: 4, max: 3 })
        ));
    }

    #[test]
    fn test_check_record_count_honors_configured_minimum() {
        let config = InputConfig {
            min_months: 5,
            max_months: 12,
            min_year: 2000,
            max_year: 2100,
        };
        let series: ConsumptionSeries = (0..4)
            .map(|i| ConsumptionRecord::new(format!("M{}", i), 1.0).unwrap())
            .collect();
        assert!(matches!(
            check_record_count(&series, &config),
            Err(AnalysisError::InsufficientData { found: 4, required: 5 })
        ));

        let series: ConsumptionSeries = (0..5)
            .map(|i| ConsumptionRecord::new(format!("M{}", i), 1.0).unwrap())
            .collect();
        assert!(check_record_count(&series, &config).is_ok());
    }
}
