//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::catalog::{ExchangeRate, RateError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG: &str = "pricer.toml";

/// Pricing settings: exchange rate and output preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Guaraníes per dollar
    #[serde(default)]
    pub exchange_rate: Option<f64>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether to list lines that could not be priced
    #[serde(default = "default_show_failed")]
    pub show_failed: bool,
}

fn default_show_failed() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self { exchange_rate: None, format: OutputFormat::Table, show_failed: default_show_failed() }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading pricer config {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads the first config found: `explicit_path`, then `pricer.toml`
    /// in the working directory, then `batch-pricer/config.toml` under the
    /// user config directory. Falls back to defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let candidates = std::iter::once(Path::new(LOCAL_CONFIG).to_path_buf())
            .chain(dirs::config_dir().map(|dir| dir.join("batch-pricer").join("config.toml")));

        for path in candidates {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        debug!("No pricer config found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(rate) = std::env::var("PRICER_RATE") {
            if let Ok(r) = rate.trim().parse() {
                self.exchange_rate = Some(r);
            }
        }

        if let Ok(format) = std::env::var("PRICER_FORMAT") {
            if let Ok(f) = format.parse() {
                self.format = f;
            }
        }

        self
    }

    /// Returns the validated exchange rate.
    pub fn rate(&self) -> Result<ExchangeRate, RateError> {
        ExchangeRate::require(self.exchange_rate)
    }
}

/// How catalogs and quotes are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Csv => "csv",
        })
    }
}
