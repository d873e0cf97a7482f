//! Interactive mode: ask for months, consumption and price on the terminal.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{info, info_span};
use uuid::Uuid;

use crate::analyzer::analyze;
use crate::config::Config;
use crate::display::DisplayManager;
use crate::input::InteractiveForm;

pub fn run_interactive(config: &Config, no_chart: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_interactive_with(config, no_chart, stdin.lock(), stdout.lock())
}

/// Runs the form and writes the report to any reader/writer pair.
pub fn run_interactive_with<R: BufRead, W: Write>(
    config: &Config,
    no_chart: bool,
    reader: R,
    mut writer: W,
) -> Result<()> {
    let span = info_span!("analysis_run", run_id = %Uuid::new_v4(), command = "interactive");
    let _enter = span.enter();

    writeln!(writer, "Electricity Consumption Analysis")?;
    writeln!(
        writer,
        "Enter your monthly consumption to get statistics and a forecast.\n"
    )?;

    let mut form = InteractiveForm::new(
        reader,
        &mut writer,
        &config.input,
        &config.output.currency_symbol,
    );

    let Some(series) = form.collect_series()? else {
        return Ok(());
    };
    let Some(unit_price) = form.collect_unit_price()? else {
        return Ok(());
    };
    drop(form);

    info!(
        records = series.len(),
        unit_price = unit_price.value(),
        "Running consumption analysis"
    );
    let result = analyze(&series, unit_price)?;

    let display = DisplayManager::new(&config.output)
        .with_chart(config.output.show_chart && !no_chart);
    write!(writer, "{}", display.format_report(&series, &result))?;
    writer.flush()?;
    Ok(())
}
