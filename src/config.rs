//! Configuration management for farescan.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub debounce: DebounceConfig,
}

/// Analysis and profitability settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Target earnings per hour, in the fare currency.
    #[serde(default = "default_hourly_rate")]
    pub desired_hourly_rate: f64,
    /// Minimum driver rating filter. Accepted and persisted but not
    /// enforced by the classifier; whether it should gate profitability
    /// is an open product question.
    #[serde(default)]
    pub min_rating: Option<f64>,
    /// Testing flag: skip extraction and surface the raw recognized text.
    #[serde(default)]
    pub show_raw_text: bool,
}

fn default_hourly_rate() -> f64 {
    10000.0
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            desired_hourly_rate: default_hourly_rate(),
            min_rating: None,
            show_raw_text: false,
        }
    }
}

/// Debounce intervals for the snapshot stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebounceConfig {
    /// Minimum gap between OCR rounds on captured frames.
    #[serde(default = "default_ocr_interval")]
    pub ocr_interval_ms: u64,
    /// Minimum gap between analyses of accessibility text events.
    #[serde(default = "default_event_interval")]
    pub event_interval_ms: u64,
}

fn default_ocr_interval() -> u64 {
    900
}

fn default_event_interval() -> u64 {
    200
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            ocr_interval_ms: default_ocr_interval(),
            event_interval_ms: default_event_interval(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/farescan/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join("config.toml"))
    }

    /// Get the config directory path (~/.config/farescan)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("farescan"))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        let config_dir = Self::config_dir()?;

        fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;

        let contents =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }
}
