//! Non-interactive analysis from `--record` values and/or a JSON series file.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, info_span};
use uuid::Uuid;

use crate::analyzer::analyze;
use crate::config::Config;
use crate::display::DisplayManager;
use crate::input::{check_record_count, load_series_file, parse_record_arg};
use crate::models::{ConsumptionSeries, UnitPrice};

#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    pub records: Vec<String>,
    pub file: Option<PathBuf>,
    pub unit_price: Option<f64>,
    pub json_output: bool,
    pub no_chart: bool,
}

/// Builds the series (file records first, then `--record` values) and
/// resolves the unit price, `--price` taking precedence over the file.
pub fn build_request(options: &AnalyzeOptions) -> Result<(ConsumptionSeries, UnitPrice)> {
    let (mut series, file_price) = match &options.file {
        Some(path) => {
            let loaded = load_series_file(path)
                .with_context(|| format!("Failed to load series file: {}", path.display()))?;
            (loaded.series, loaded.unit_price)
        }
        None => (ConsumptionSeries::new(), None),
    };

    for arg in &options.records {
        series.push(parse_record_arg(arg)?);
    }

    let unit_price = match options.unit_price {
        Some(price) => UnitPrice::new(price)?,
        None => file_price
            .context("No unit price given; pass --price or set unit_price in the series file")?,
    };

    Ok((series, unit_price))
}

pub fn run_analyze(config: &Config, options: AnalyzeOptions) -> Result<()> {
    let span = info_span!("analysis_run", run_id = %Uuid::new_v4(), command = "analyze");
    let _enter = span.enter();

    let (series, unit_price) = build_request(&options)?;
    check_record_count(&series, &config.input)?;

    info!(
        records = series.len(),
        unit_price = unit_price.value(),
        "Running consumption analysis"
    );
    let result = analyze(&series, unit_price)?;

    DisplayManager::new(&config.output)
        .with_chart(config.output.show_chart && !options.no_chart)
        .display_analysis(&series, &result, options.json_output)
}
