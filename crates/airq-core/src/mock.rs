//! Mock sensor implementation for testing.
//!
//! This module provides a sensor with a fixed, caller-supplied reading that
//! can be used for unit testing renderers and pairing flows without the
//! randomized vendor simulations.
//!
//! The [`MockSensor`] implements the [`AirQualitySensor`] trait, allowing it
//! to be used interchangeably with the vendor adapters in a fleet.
//!
//! # Features
//!
//! - **Fixed readings**: Any [`Reading`], including malformed ones
//! - **Credential check**: Accept only one exact connection string
//! - **Failure injection**: Make `get_data` fail with a [`ParseError`]

use std::cell::Cell;

use airq_types::{Parameter, ParseError, Reading};

use crate::error::{Error, Result};
use crate::traits::AirQualitySensor;

/// A mock air-quality sensor for testing.
///
/// # Example
///
/// ```
/// use airq_core::{AirQualitySensor, MockSensorBuilder};
///
/// let sensor = MockSensorBuilder::new().room_name("Attic").aqi(170).build();
/// let reading = sensor.get_data().unwrap();
/// assert_eq!(reading.aqi().map(|p| p.value()), Some(170));
/// assert_eq!(sensor.read_count(), 1);
/// ```
#[derive(Debug)]
pub struct MockSensor {
    model: String,
    room_name: String,
    connected: bool,
    accepted: Option<String>,
    reading: Reading,
    failure: Option<ParseError>,
    read_count: Cell<u32>,
}

impl MockSensor {
    /// Number of times `get_data` was called while connected.
    pub fn read_count(&self) -> u32 {
        self.read_count.get()
    }

    /// Reset the read counter.
    pub fn reset_read_count(&self) {
        self.read_count.set(0);
    }

    /// Replace the reading returned by subsequent queries.
    pub fn set_reading(&mut self, reading: Reading) {
        self.reading = reading;
    }

    /// Make subsequent queries fail, or succeed again with `None`.
    pub fn set_failure(&mut self, failure: Option<ParseError>) {
        self.failure = failure;
    }
}

impl AirQualitySensor for MockSensor {
    fn connect(&mut self, connection_data: &str) -> bool {
        let accepted = self
            .accepted
            .as_deref()
            .is_none_or(|expected| expected == connection_data);
        if accepted {
            self.connected = true;
        }
        accepted
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn set_room_name(&mut self, room_name: &str) {
        if self.connected {
            self.room_name = room_name.to_string();
        }
    }

    fn room_name(&self) -> &str {
        &self.room_name
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn get_data(&self) -> Result<Reading> {
        if !self.connected {
            return Ok(Reading::empty());
        }
        self.read_count.set(self.read_count.get() + 1);

        match &self.failure {
            Some(err) => Err(Error::Parse(err.clone())),
            None => Ok(self.reading.clone()),
        }
    }
}

/// Builder for creating mock sensors with custom settings.
#[derive(Debug)]
pub struct MockSensorBuilder {
    model: String,
    room_name: String,
    auto_connect: bool,
    accepted: Option<String>,
    reading: Reading,
    failure: Option<ParseError>,
}

impl Default for MockSensorBuilder {
    fn default() -> Self {
        Self {
            model: "mock".to_string(),
            room_name: String::new(),
            auto_connect: true,
            accepted: None,
            reading: Reading::new(vec![Parameter::aqi(25)]),
            failure: None,
        }
    }
}

impl MockSensorBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model label.
    #[must_use]
    pub fn model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Set the room name (applied only if the sensor starts connected).
    #[must_use]
    pub fn room_name(mut self, room_name: &str) -> Self {
        self.room_name = room_name.to_string();
        self
    }

    /// Return a reading holding only this AQI.
    #[must_use]
    pub fn aqi(mut self, aqi: i32) -> Self {
        self.reading = Reading::new(vec![Parameter::aqi(aqi)]);
        self
    }

    /// Return this exact reading.
    #[must_use]
    pub fn reading(mut self, reading: Reading) -> Self {
        self.reading = reading;
        self
    }

    /// Set whether the sensor starts connected.
    #[must_use]
    pub fn auto_connect(mut self, auto: bool) -> Self {
        self.auto_connect = auto;
        self
    }

    /// Accept only this connection data. Anything is accepted by default.
    #[must_use]
    pub fn accept_only(mut self, connection_data: &str) -> Self {
        self.accepted = Some(connection_data.to_string());
        self
    }

    /// Fail every read with `err`.
    #[must_use]
    pub fn fail_with(mut self, err: ParseError) -> Self {
        self.failure = Some(err);
        self
    }

    /// Build the mock sensor.
    #[must_use]
    pub fn build(self) -> MockSensor {
        let room_name = if self.auto_connect {
            self.room_name
        } else {
            String::new()
        };
        MockSensor {
            model: self.model,
            room_name,
            connected: self.auto_connect,
            accepted: self.accepted,
            reading: self.reading,
            failure: self.failure,
            read_count: Cell::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let sensor = MockSensorBuilder::new().build();
        assert!(sensor.is_connected());
        assert_eq!(sensor.model(), "mock");
        assert_eq!(sensor.room_name(), "");
        assert_eq!(sensor.get_data().unwrap().len(), 1);
    }

    #[test]
    fn test_not_connected_returns_empty() {
        let mut sensor = MockSensorBuilder::new()
            .auto_connect(false)
            .room_name("Ignored")
            .build();
        assert_eq!(sensor.room_name(), "");
        assert!(sensor.get_data().unwrap().is_empty());
        assert_eq!(sensor.read_count(), 0);

        sensor.set_room_name("Hall");
        assert_eq!(sensor.room_name(), "");
    }

    #[test]
    fn test_accept_only() {
        let mut sensor = MockSensorBuilder::new()
            .auto_connect(false)
            .accept_only("abc123")
            .build();
        assert!(!sensor.connect("abc124"));
        assert!(!sensor.is_connected());
        assert!(sensor.connect("abc123"));
        assert!(sensor.is_connected());
    }

    #[test]
    fn test_fail_with() {
        let sensor = MockSensorBuilder::new()
            .fail_with(ParseError::missing_field("Humidity"))
            .build();
        let err = sensor.get_data().unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::MissingField { .. })));
        assert_eq!(sensor.read_count(), 1);
    }

    #[test]
    fn test_set_failure_and_reading() {
        let mut sensor = MockSensorBuilder::new()
            .fail_with(ParseError::missing_field("CO2Level"))
            .build();
        assert!(sensor.get_data().is_err());

        sensor.set_failure(None);
        sensor.set_reading(Reading::new(vec![Parameter::aqi(99)]));
        assert_eq!(sensor.get_data().unwrap().aqi().map(Parameter::value), Some(99));
    }

    #[test]
    fn test_read_count() {
        let sensor = MockSensorBuilder::new().aqi(40).build();
        for _ in 0..3 {
            sensor.get_data().unwrap();
        }
        assert_eq!(sensor.read_count(), 3);
        sensor.reset_read_count();
        assert_eq!(sensor.read_count(), 0);
    }

    #[test]
    fn test_trait_object() {
        let sensors: Vec<Box<dyn AirQualitySensor>> = vec![
            Box::new(MockSensorBuilder::new().aqi(10).build()),
            Box::new(MockSensorBuilder::new().aqi(200).build()),
        ];
        let values: Vec<i32> = sensors
            .iter()
            .filter_map(|s| s.get_data().ok()?.aqi().map(Parameter::value))
            .collect();
        assert_eq!(values, [10, 200]);
    }
}
