//! End-to-end tests of the energy-usage binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("energy-usage").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_analyze_json_output() {
    let output = cli()
        .args([
            "analyze",
            "--record",
            "Jan/2024=100",
            "--record",
            "Feb/2024=120",
            "--record",
            "Mar/2024=110",
            "--price",
            "0.80",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["mean_kwh"], 110.0);
    assert_eq!(value["stddev_kwh"], 10.0);
    assert_eq!(value["daily_average_kwh"], 3.67);
    assert_eq!(value["forecast_next_month_kwh"], 110.0);
    assert_eq!(value["estimated_next_cost"], 88.0);
}

#[test]
fn test_analyze_text_report() {
    cli()
        .args([
            "analyze",
            "--record",
            "Jan/2024=100",
            "--record",
            "Feb/2024=120",
            "--record",
            "Mar/2024=110",
            "--price",
            "0.80",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 88.00"))
        .stdout(predicate::str::contains("Mean = 110.0 kWh"));
}

#[test]
fn test_analyze_from_file_with_price_override() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("series.json");
    fs::write(
        &path,
        r#"{"unit_price": 0.5, "records": [
            {"period": "Jan/2024", "consumption_kwh": 100},
            {"period": "Feb/2024", "consumption_kwh": 120}
        ]}"#,
    )
    .unwrap();

    cli()
        .args(["analyze", "--file"])
        .arg(&path)
        .args(["--record", "Mar/2024=110", "--price", "1.0", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"estimated_next_cost\": 110.0"));
}

#[test]
fn test_insufficient_data_fails() {
    cli()
        .args([
            "analyze",
            "--record",
            "Jan/2024=100",
            "--record",
            "Feb/2024=120",
            "--price",
            "0.80",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("insufficient data"))
        .stdout(predicate::str::contains("Descriptive Statistics").not());
}

#[test]
fn test_invalid_record_reports_json_error() {
    cli()
        .args(["analyze", "--record", "Jan/2024=-4", "--price", "1", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\""));
}

#[test]
fn test_too_many_records_fails() {
    let mut cmd = cli();
    cmd.arg("analyze").args(["--price", "1"]);
    for month in 1..=13 {
        cmd.args(["--record", &format!("{:02}/2024=10", month)]);
    }
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("too many records"));
}

#[test]
fn test_interactive_from_stdin() {
    cli()
        .arg("interactive")
        .arg("--no-chart")
        .write_stdin("3\nJan\n2024\n100\nFeb\n2024\n120\nMar\n2024\n110\n0.80\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 88.00"))
        .stdout(predicate::str::contains("Monthly Consumption").not());
}
