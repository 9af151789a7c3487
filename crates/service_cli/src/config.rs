//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.

use pricer_core::types::Date;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid valuation date: {0}. Expected YYYY-MM-DD")]
    InvalidValuationDate(String),

    #[error("Invalid boolean for {name}: {value}")]
    InvalidBool { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Pricer run configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricerConfig {
    /// JSON array of option records
    pub input: PathBuf,
    /// Directory receiving `prices_<maturity>.csv` tables
    pub reports_dir: PathBuf,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Fixed valuation date; today when absent
    pub valuation_date: Option<String>,
    /// Price the batch on the rayon pool
    pub parallel: bool,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/market_data.json"),
            reports_dir: PathBuf::from("reports"),
            log_level: LogLevel::Info,
            valuation_date: None,
            parallel: true,
        }
    }
}

const ENV_INPUT: &str = "PRICER_INPUT";
const ENV_REPORTS_DIR: &str = "PRICER_REPORTS_DIR";
const ENV_LOG_LEVEL: &str = "PRICER_LOG_LEVEL";
const ENV_VALUATION_DATE: &str = "PRICER_VALUATION_DATE";
const ENV_PARALLEL: &str = "PRICER_PARALLEL";

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

impl PricerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: PricerConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Override fields from any variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup(ENV_INPUT) {
            self.input = PathBuf::from(input);
        }
        if let Some(dir) = lookup(ENV_REPORTS_DIR) {
            self.reports_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(date) = lookup(ENV_VALUATION_DATE) {
            self.valuation_date = Some(date);
        }
        if let Some(parallel) = lookup(ENV_PARALLEL) {
            self.parallel = parse_bool(ENV_PARALLEL, &parallel)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(input) = &cli.input {
            self.input = input.clone();
        }
        if let Some(dir) = &cli.reports_dir {
            self.reports_dir = dir.clone();
        }
        if let Some(date) = &cli.valuation_date {
            self.valuation_date = Some(date.clone());
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve_valuation_date().map(|_| ())
    }

    /// The configured valuation date, or today.
    pub fn resolve_valuation_date(&self) -> Result<Date, ConfigError> {
        match &self.valuation_date {
            Some(value) => {
                Date::parse(value).map_err(|_| ConfigError::InvalidValuationDate(value.clone()))
            }
            None => Ok(Date::today()),
        }
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Input file override
    pub input: Option<PathBuf>,
    /// Reports directory override
    pub reports_dir: Option<PathBuf>,
    /// Valuation date override
    pub valuation_date: Option<String>,
    /// Force debug logging
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<PricerConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => PricerConfig::from_file(path)?,
        None => PricerConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
