//! Output Formatting and Display Management
//!
//! This module renders analysis results for the terminal or as JSON.
//!
//! ## Report Sections
//!
//! - **Descriptive Statistics**: mean, median, max, min, standard deviation
//!   and range in kWh, two decimals
//! - **Average Daily Consumption**: mean over a 30-day month
//! - **Next Month Forecast**: moving average of the last three periods
//! - **Estimated Next Bill**: forecast times unit price, with the configured
//!   currency symbol
//! - **Monthly Consumption**: horizontal text bar chart, one bar per period
//!   in entry order, with a `┊` marker at the mean
//! - **Technical Note**: how the forecast was produced
//!
//! ## JSON Output
//!
//! When `json_output` is enabled only the rounded
//! [`AnalysisReport`](crate::models::AnalysisReport) is printed:
//! ```json
//! {
//!   "mean_kwh": 110.0,
//!   "median_kwh": 110.0,
//!   "max_kwh": 120.0,
//!   "min_kwh": 100.0,
//!   "stddev_kwh": 10.0,
//!   "range_kwh": 20.0,
//!   "daily_average_kwh": 3.67,
//!   "forecast_next_month_kwh": 110.0,
//!   "estimated_next_cost": 88.0
//! }
//! ```

use crate::analyzer::FORECAST_WINDOW;
use crate::config::{Config, OutputConfig};
use crate::models::{AnalysisResult, ConsumptionSeries};
use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};

const MEAN_MARKER: char = '┊';
const BAR_CHAR: char = '█';

pub struct DisplayManager {
    currency_symbol: String,
    json_pretty: bool,
    show_chart: bool,
    chart_width: usize,
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(&Config::default().output)
    }
}

impl DisplayManager {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            json_pretty: config.json_pretty,
            show_chart: config.show_chart,
            chart_width: config.chart_width,
        }
    }

    pub fn with_chart(mut self, show_chart: bool) -> Self {
        self.show_chart = show_chart;
        self
    }

    pub fn display_analysis(
        &self,
        series: &ConsumptionSeries,
        result: &AnalysisResult,
        json_output: bool,
    ) -> Result<()> {
        if json_output {
            println!("{}", self.format_json(result)?);
        } else {
            print!("{}", self.format_report(series, result));
        }
        Ok(())
    }

    pub fn format_json(&self, result: &AnalysisResult) -> Result<String> {
        let report = result.report();
        let json = if self.json_pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.context("Error serializing analysis to JSON")
    }

    pub fn format_report(&self, series: &ConsumptionSeries, result: &AnalysisResult) -> String {
        let report = result.report();
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", "=".repeat(60).bright_cyan()));
        out.push_str(&format!(
            "{}\n",
            "Electricity Consumption Analysis".bright_white().bold()
        ));
        out.push_str(&format!("{}\n", "=".repeat(60).bright_cyan()));

        out.push_str(&section_header("📊".bright_yellow(), "Descriptive Statistics"));
        let rows = [
            ("Mean", report.mean_kwh),
            ("Median", report.median_kwh),
            ("Maximum", report.max_kwh),
            ("Minimum", report.min_kwh),
            ("Standard deviation", report.stddev_kwh),
            ("Range", report.range_kwh),
        ];
        for (label, value) in rows {
            out.push_str(&format!(
                "   {:<26} {}\n",
                format!("{} (kWh):", label),
                format!("{:.2}", value).bright_white().bold()
            ));
        }

        // Every figure below comes from the rounded report so text and JSON agree.
        out.push_str(&section_header("📅".bright_blue(), "Average Daily Consumption"));
        out.push_str(&format!(
            "   {}\n",
            format!("{:.2} kWh/day", report.daily_average_kwh).bright_white()
        ));

        out.push_str(&section_header("🔮".bright_magenta(), "Next Month Forecast"));
        out.push_str(&format!(
            "   {}\n",
            format!("{:.2} kWh", report.forecast_next_month_kwh).bright_white()
        ));

        out.push_str(&section_header("💡".bright_yellow(), "Estimated Next Bill"));
        out.push_str(&format!(
            "   {}\n",
            format!("{} {:.2}", self.currency_symbol, report.estimated_next_cost)
                .bright_green()
                .bold()
        ));

        if self.show_chart {
            out.push_str(&section_header("📈".bright_cyan(), "Monthly Consumption"));
            out.push_str(&render_chart(series, result.mean, self.chart_width));
        }

        out.push_str(&section_header("📝".bright_blue(), "Technical Note"));
        out.push_str(&format!(
            "   The forecast is a simple moving average with a fixed {}-month window,\n   \
             using the last {} periods entered.\n",
            FORECAST_WINDOW, FORECAST_WINDOW
        ));

        out
    }
}

fn section_header(icon: ColoredString, title: &str) -> String {
    format!("\n{} {}\n", icon, title.bright_white().bold())
}

/// Draws one horizontal bar per record, scaled to `width` columns against the
/// largest value, with a marker column at the mean.
pub fn render_chart(series: &ConsumptionSeries, mean: f64, width: usize) -> String {
    let max = series
        .records()
        .iter()
        .map(|r| r.consumption_kwh())
        .fold(0.0_f64, f64::max);
    let scale = |value: f64| -> usize {
        if max > 0.0 {
            ((value / max) * width as f64).round() as usize
        } else {
            0
        }
    };
    let mean_col = scale(mean).min(width);
    let label_width = series
        .records()
        .iter()
        .map(|r| r.period().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for record in series.records() {
        let bar_len = scale(record.consumption_kwh()).min(width);
        let bar: String = (0..=width)
            .map(|col| {
                if col < bar_len {
                    BAR_CHAR
                } else if col == mean_col {
                    MEAN_MARKER
                } else {
                    ' '
                }
            })
            .collect();
        out.push_str(&format!(
            "   {:>label_width$} │{} {:.1}\n",
            record.period(),
            bar.bright_blue(),
            record.consumption_kwh(),
            label_width = label_width
        ));
    }
    out.push_str(&format!(
        "   {:>label_width$}  {} Mean = {:.1} kWh\n",
        "",
        MEAN_MARKER,
        mean,
        label_width = label_width
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConsumptionRecord;

    fn series(values: &[(&str, f64)]) -> ConsumptionSeries {
        values
            .iter()
            .map(|(p, v)| ConsumptionRecord::new(*p, *v).unwrap())
            .collect()
    }

    #[test]
    fn test_chart_bar_lengths() {
        colored::control::set_override(false);
        let chart = render_chart(&series(&[("A", 50.0), ("B", 100.0)]), 75.0, 10);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches(BAR_CHAR).count(), 5);
        assert_eq!(lines[1].matches(BAR_CHAR).count(), 10);
        assert!(lines[2].contains("Mean = 75.0 kWh"));
    }

    #[test]
    fn test_chart_all_zero() {
        colored::control::set_override(false);
        let chart = render_chart(&series(&[("A", 0.0), ("B", 0.0), ("C", 0.0)]), 0.0, 10);
        assert_eq!(chart.matches(BAR_CHAR).count(), 0);
        assert!(chart.contains("Mean = 0.0 kWh"));
    }
}
