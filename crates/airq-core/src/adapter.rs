//! Adapters normalizing vendor SDKs onto [`AirQualitySensor`].
//!
//! Each adapter owns its vendor sensor and translates the vendor's native
//! reading into a [`Reading`]:
//!
//! | Adapter | Vendor | Reading |
//! |---------|--------|---------|
//! | [`IndexOnlySensorAdapter`] | [`IndexVendorSensor`] | `AQI` |
//! | [`StructuredSensorAdapter`] | [`StructuredVendorSensor`] | `AQI`, `CO2` (ppm), `Temperature` (Celsius), `Humidity` (%) |
//!
//! Both adapters return an empty reading while the vendor is not connected.
//!
//! [`SensorKind`] names the available adapters so configuration files can
//! describe a fleet without referring to concrete types.

use core::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use airq_types::{Parameter, Reading, names, units};

use crate::blob::{self, BlobValues};
use crate::error::Result;
use crate::traits::AirQualitySensor;
use crate::vendor::{IndexVendorSensor, StructuredVendorSensor};

/// Wraps the index-only vendor.
#[derive(Debug, Default)]
pub struct IndexOnlySensorAdapter {
    sensor: IndexVendorSensor,
}

impl IndexOnlySensorAdapter {
    pub const MODEL: &'static str = "index-only";

    /// Wrap an existing vendor sensor.
    pub fn new(sensor: IndexVendorSensor) -> Self {
        Self { sensor }
    }

    /// Create the adapter and its vendor sensor from a random source.
    pub fn with_rng(rng: impl RngCore + 'static) -> Self {
        Self::new(IndexVendorSensor::new(rng))
    }

    /// The wrapped vendor sensor.
    pub fn vendor(&self) -> &IndexVendorSensor {
        &self.sensor
    }
}

impl AirQualitySensor for IndexOnlySensorAdapter {
    fn connect(&mut self, connection_data: &str) -> bool {
        self.sensor.connect(connection_data)
    }

    fn is_connected(&self) -> bool {
        self.sensor.is_connected()
    }

    fn set_room_name(&mut self, room_name: &str) {
        self.sensor.set_room_name(room_name)
    }

    fn room_name(&self) -> &str {
        self.sensor.room_name()
    }

    fn model(&self) -> &str {
        Self::MODEL
    }

    fn get_data(&self) -> Result<Reading> {
        match self.sensor.air_quality_index() {
            IndexVendorSensor::NOT_CONNECTED => Ok(Reading::empty()),
            aqi => Ok(Reading::new(vec![Parameter::aqi(aqi)])),
        }
    }
}

/// Wraps the structured-payload vendor.
#[derive(Debug, Default)]
pub struct StructuredSensorAdapter {
    sensor: StructuredVendorSensor,
}

impl StructuredSensorAdapter {
    pub const MODEL: &'static str = "structured";

    /// Wrap an existing vendor sensor.
    pub fn new(sensor: StructuredVendorSensor) -> Self {
        Self { sensor }
    }

    /// Create the adapter and its vendor sensor from a random source.
    pub fn with_rng(rng: impl RngCore + 'static) -> Self {
        Self::new(StructuredVendorSensor::new(rng))
    }

    /// The wrapped vendor sensor.
    pub fn vendor(&self) -> &StructuredVendorSensor {
        &self.sensor
    }

    /// Build the normalized reading from decoded payload values.
    pub fn normalize(values: BlobValues) -> Reading {
        Reading::new(vec![
            Parameter::aqi(values.air_quality_index),
            Parameter::new(names::CO2, values.co2_level, units::PPM),
            Parameter::new(names::TEMPERATURE, values.temperature, units::CELSIUS),
            Parameter::new(names::HUMIDITY, values.humidity, units::PERCENT),
        ])
    }
}

impl AirQualitySensor for StructuredSensorAdapter {
    fn connect(&mut self, connection_data: &str) -> bool {
        self.sensor.connect(connection_data)
    }

    fn is_connected(&self) -> bool {
        self.sensor.is_connected()
    }

    fn set_room_name(&mut self, room_name: &str) {
        self.sensor.set_room_name(room_name)
    }

    fn room_name(&self) -> &str {
        self.sensor.room_name()
    }

    fn model(&self) -> &str {
        Self::MODEL
    }

    fn get_data(&self) -> Result<Reading> {
        let payload = self.sensor.structured_payload();
        if payload.is_empty() {
            return Ok(Reading::empty());
        }
        let values = blob::parse_blob(&payload).inspect_err(|e| {
            debug!(room = self.room_name(), "failed to decode payload: {}", e);
        })?;
        Ok(Self::normalize(values))
    }
}

/// The adapters available for building a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensorKind {
    /// [`IndexOnlySensorAdapter`]
    Index,
    /// [`StructuredSensorAdapter`]
    Structured,
}

impl SensorKind {
    /// Create an unconnected sensor of this kind.
    pub fn build(self, rng: impl RngCore + 'static) -> Box<dyn AirQualitySensor> {
        match self {
            SensorKind::Index => Box::new(IndexOnlySensorAdapter::with_rng(rng)),
            SensorKind::Structured => Box::new(StructuredSensorAdapter::with_rng(rng)),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Index => "index",
            SensorKind::Structured => "structured",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "index" => Ok(SensorKind::Index),
            "structured" => Ok(SensorKind::Structured),
            _ => Err(format!(
                "Unknown sensor kind '{}'. Valid kinds: index, structured",
                s
            )),
        }
    }
}
