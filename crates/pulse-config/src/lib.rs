//! Configuration management for pulse.
//!
//! Loads configuration from TOML files; asset and timeframe strings are
//! validated into the closed enums, so an unrecognized value is rejected at
//! load time and callers keep their previous valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use pulse_core::{Asset, ChartConfig, Timeframe};

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Unknown asset: {0}")]
    UnknownAsset(String),
    #[error("Unknown timeframe: {0}")]
    UnknownTimeframe(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub chart: ChartSection,
    pub feed: FeedSection,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations.
    ///
    /// Searches in order:
    /// 1. `./pulse.toml`
    /// 2. `~/.config/pulse/pulse.toml`
    ///
    /// Returns default config if no file found.
    pub fn load_default() -> Self {
        if let Ok(config) = Self::load("pulse.toml") {
            return config;
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("pulse").join("pulse.toml");
            if let Ok(config) = Self::load(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    /// Save configuration to a file path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("pulse.toml")
    }

    /// Validate the chart section into a typed configuration.
    pub fn chart_config(&self) -> Result<ChartConfig, ConfigError> {
        let asset = Asset::from_label(&self.chart.asset)
            .ok_or_else(|| ConfigError::UnknownAsset(self.chart.asset.clone()))?;
        let timeframe = Timeframe::from_label(&self.chart.timeframe)
            .ok_or_else(|| ConfigError::UnknownTimeframe(self.chart.timeframe.clone()))?;

        Ok(ChartConfig { asset, timeframe })
    }
}

/// Chart selector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSection {
    /// Asset symbol shown on startup.
    pub asset: String,
    /// Timeframe selected on startup.
    pub timeframe: String,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            asset: "BTC/USDT".to_string(),
            timeframe: "1H".to_string(),
        }
    }
}

/// Feed scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSection {
    /// Refresh period in milliseconds.
    pub refresh_ms: u64,
    /// Number of candles per generated series.
    pub series_length: usize,
    /// Price the random walk starts from.
    pub seed_price: f64,
    /// Continue each refresh from the previous last close instead of
    /// restarting at `seed_price`.
    pub carry_last_close: bool,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            refresh_ms: 10_000,
            series_length: 31,
            seed_price: 43_000.0,
            carry_last_close: false,
        }
    }
}
