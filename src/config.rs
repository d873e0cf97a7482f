//! Configuration system
//!
//! Provides centralized configuration management with:
//! - Environment variable support
//! - Config file loading (optional)
//! - Runtime defaults
//! - Validation and type safety

use crate::analyzer::MIN_RECORDS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Main configuration structure
///
/// Every section falls back to its defaults, so a config file only needs the
/// keys it overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Input gates applied before analysis
    pub input: InputConfig,

    /// Report and chart rendering
    pub output: OutputConfig,

    /// Paths configuration
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub min_months: usize,
    pub max_months: usize,
    pub min_year: i32,
    pub max_year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json_pretty: bool,
    pub currency_symbol: String,
    pub show_chart: bool,
    pub chart_width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub log_directory: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "WARN".to_string(),
            format: "pretty".to_string(),
            output: "console".to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_months: MIN_RECORDS,
            max_months: 12,
            min_year: 2000,
            max_year: 2100,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_pretty: true,
            currency_symbol: "R$".to_string(),
            show_chart: true,
            chart_width: 40,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            log_directory: PathBuf::from("logs"),
        }
    }
}

impl Config {
    /// Load configuration from environment, file, and defaults
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        let config_paths = [
            PathBuf::from("energy-usage.toml"),
            PathBuf::from(".energy-usage.toml"),
            dirs::config_dir()
                .map(|d| d.join("energy-usage").join("config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.is_file() {
                info!(config_file = %path.display(), "Loading configuration from file");
                config = Self::load_from_file(path)?;
                break;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        // Logging overrides
        if let Ok(val) = env::var("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Ok(val) = env::var("LOG_OUTPUT") {
            self.logging.output = val;
        }

        // Input overrides
        if let Ok(val) = env::var("ENERGY_USAGE_MAX_MONTHS") {
            self.input.max_months = val
                .parse()
                .context("Invalid ENERGY_USAGE_MAX_MONTHS")?;
        }

        // Output overrides
        if let Ok(val) = env::var("ENERGY_USAGE_CURRENCY") {
            self.output.currency_symbol = val;
        }
        if let Ok(val) = env::var("ENERGY_USAGE_CHART_WIDTH") {
            self.output.chart_width = val
                .parse()
                .context("Invalid ENERGY_USAGE_CHART_WIDTH")?;
        }

        // Path overrides
        if let Ok(val) = env::var("ENERGY_USAGE_LOG_DIR") {
            self.paths.log_directory = PathBuf::from(val);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.input.min_months < MIN_RECORDS {
            return Err(anyhow::anyhow!(
                "Minimum months must be at least {}, got {}",
                MIN_RECORDS,
                self.input.min_months
            ));
        }

        if self.input.max_months < self.input.min_months {
            return Err(anyhow::anyhow!(
                "Maximum months ({}) cannot be below minimum months ({})",
                self.input.max_months,
                self.input.min_months
            ));
        }

        if self.input.min_year > self.input.max_year {
            return Err(anyhow::anyhow!(
                "Year range is empty: {}..={}",
                self.input.min_year,
                self.input.max_year
            ));
        }

        if self.output.chart_width < 10 || self.output.chart_width > 200 {
            return Err(anyhow::anyhow!(
                "Chart width must be between 10 and 200 columns, got {}",
                self.output.chart_width
            ));
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(anyhow::anyhow!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.logging.format
            ));
        }

        match self.logging.output.as_str() {
            "console" => {}
            "file" | "both" => {
                if !self.paths.log_directory.exists() {
                    fs::create_dir_all(&self.paths.log_directory)
                        .context("Failed to create log directory")?;
                }
            }
            other => {
                return Err(anyhow::anyhow!(
                    "Unknown log output '{}', expected 'console', 'file' or 'both'",
                    other
                ));
            }
        }

        Ok(())
    }

    /// Save current configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        info!(path = %path.display(), "Configuration saved to file");

        Ok(())
    }
}
