//! AQI severity bands and thresholds.
//!
//! This module categorizes an air quality index into the three bands used
//! for display styling.
//!
//! # Example
//!
//! ```
//! use airq_core::{AqiBand, Thresholds};
//!
//! let thresholds = Thresholds::default();
//! assert_eq!(thresholds.evaluate(50), AqiBand::Good);
//! assert_eq!(thresholds.evaluate(151), AqiBand::Poor);
//! assert_eq!(AqiBand::Poor.advisory(), Some("Open a window!"));
//! ```

use serde::{Deserialize, Serialize};

use airq_types::Reading;

use crate::error::{Error, Result};

/// AQI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AqiBand {
    /// Healthy air (default: AQI <= 50).
    Good,
    /// Acceptable air (default: AQI 51-150).
    Moderate,
    /// Unhealthy air (default: AQI > 150).
    Poor,
}

impl AqiBand {
    /// Advice shown next to the reading, if any.
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            AqiBand::Poor => Some("Open a window!"),
            AqiBand::Good | AqiBand::Moderate => None,
        }
    }
}

/// Configuration for AQI thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Upper bound (inclusive) for the Good band.
    pub good_max: i32,
    /// Upper bound (inclusive) for the Moderate band.
    pub moderate_max: i32,
    // Above moderate_max is Poor
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            good_max: 50,
            moderate_max: 150,
        }
    }
}

impl ThresholdConfig {
    /// Check that the bands are ordered.
    pub fn validate(&self) -> Result<()> {
        if self.good_max >= self.moderate_max {
            return Err(Error::invalid_config(format!(
                "good_max ({}) must be below moderate_max ({})",
                self.good_max, self.moderate_max
            )));
        }
        Ok(())
    }
}

/// Threshold evaluator for AQI values.
#[derive(Debug, Clone, Default)]
pub struct Thresholds {
    config: ThresholdConfig,
}

impl Thresholds {
    /// Create a threshold evaluator, rejecting unordered bands.
    pub fn new(config: ThresholdConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    /// Classify an AQI value.
    pub fn evaluate(&self, aqi: i32) -> AqiBand {
        if aqi <= self.config.good_max {
            AqiBand::Good
        } else if aqi <= self.config.moderate_max {
            AqiBand::Moderate
        } else {
            AqiBand::Poor
        }
    }

    /// Classify the AQI of a reading, if it has one.
    pub fn evaluate_reading(&self, reading: &Reading) -> Option<AqiBand> {
        reading.aqi().map(|p| self.evaluate(p.value()))
    }
}
