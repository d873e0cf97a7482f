use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use energy_usage::commands::{run_analyze, run_interactive, AnalyzeOptions};
use energy_usage::config::Config;
use energy_usage::logging::init_logging;

#[derive(Parser)]
#[command(name = "energy-usage")]
#[command(about = "Monthly electricity consumption statistics, forecast and bill estimate")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a series given on the command line or in a JSON file
    Analyze {
        /// Monthly record as PERIOD=KWH (repeatable, entry order is kept)
        #[arg(long = "record", value_name = "PERIOD=KWH")]
        records: Vec<String>,
        /// JSON series file with "records" and optional "unit_price"
        #[arg(long)]
        file: Option<PathBuf>,
        /// Price per kWh
        #[arg(long)]
        price: Option<f64>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
        /// Skip the bar chart
        #[arg(long)]
        no_chart: bool,
    },
    /// Enter months, consumption and price interactively
    Interactive {
        /// Skip the bar chart
        #[arg(long)]
        no_chart: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = cli
        .command
        .unwrap_or(Commands::Interactive { no_chart: false });
    let json = matches!(command, Commands::Analyze { json: true, .. });

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => handle_error(e, json),
    };
    let _log_guard = init_logging(&config);

    let outcome = match command {
        Commands::Analyze {
            records,
            file,
            price,
            json,
            no_chart,
        } => run_analyze(
            &config,
            AnalyzeOptions {
                records,
                file,
                unit_price: price,
                json_output: json,
                no_chart,
            },
        ),
        Commands::Interactive { no_chart } => run_interactive(&config, no_chart),
    };

    match outcome {
        Ok(()) => Ok(()),
        Err(e) => handle_error(e, json),
    }
}

fn handle_error(e: anyhow::Error, json: bool) -> ! {
    if json {
        println!("{}", serde_json::json!({ "error": format!("{:#}", e) }));
    } else {
        eprintln!("Error: {:#}", e);
    }
    process::exit(1);
}
