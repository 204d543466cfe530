//! Configuration file management.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use airq_core::{SensorKind, ThresholdConfig};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Print CO2, temperature and humidity below the AQI line
    #[serde(default = "default_true")]
    pub show_details: bool,

    /// Disable colored output
    #[serde(default)]
    pub no_color: bool,

    /// Seed for the simulated sensors (random if unset)
    #[serde(default)]
    pub seed: Option<u64>,

    /// AQI band limits
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// Sensors to pair, in report order
    #[serde(default = "default_sensors")]
    pub sensors: Vec<SensorConfig>,
}

/// One sensor of the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Room label shown in reports
    pub room: String,

    /// Which adapter to use
    pub kind: SensorKind,

    /// Fixed connection data; scanned from the QR label when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_data: Option<String>,
}

impl SensorConfig {
    pub fn new(room: &str, kind: SensorKind) -> Self {
        Self {
            room: room.to_string(),
            kind,
            connection_data: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sensors() -> Vec<SensorConfig> {
    vec![
        SensorConfig::new("LivingRoom", SensorKind::Index),
        SensorConfig::new("BadRoom", SensorKind::Index),
        SensorConfig::new("OfficeRoom", SensorKind::Structured),
        SensorConfig::new("KidsRoom1", SensorKind::Structured),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_details: true,
            no_color: false,
            seed: None,
            thresholds: ThresholdConfig::default(),
            sensors: default_sensors(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("airq")
            .join("config.toml")
    }

    /// Load config from `path`, or return default if it is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!("Failed to parse config {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("Failed to read config {}: {}", path.display(), e);
                }
            }
        }
        Self::default()
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = self.to_toml()?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Render the config as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Resolve the config path: explicit argument (or `AIRQ_CONFIG`), else the default.
pub fn resolve_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(Config::path)
}

/// Resolve seed: explicit flag overrides config
pub fn resolve_seed(cmd_seed: Option<u64>, config: &Config) -> Option<u64> {
    cmd_seed.or(config.seed)
}
