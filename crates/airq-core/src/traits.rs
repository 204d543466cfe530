//! Trait abstractions for air-quality sensors.
//!
//! This module provides the [`AirQualitySensor`] trait that every vendor
//! adapter implements, so pairing and rendering never special-case a vendor.

use airq_types::Reading;

use crate::error::Result;

/// The capability surface shared by every air-quality sensor.
///
/// The trait is object safe; callers usually hold a fleet as
/// `Vec<Box<dyn AirQualitySensor>>`. Supporting a new vendor means writing a
/// new implementation, never touching the callers.
///
/// # Example
///
/// ```
/// use airq_core::{AirQualitySensor, MockSensorBuilder, Result};
///
/// fn print_aqi(sensor: &dyn AirQualitySensor) -> Result<()> {
///     if let Some(aqi) = sensor.get_data()?.aqi() {
///         println!("{}: AQI {}", sensor.room_name(), aqi.value());
///     }
///     Ok(())
/// }
///
/// let sensor = MockSensorBuilder::new().room_name("Hall").aqi(40).build();
/// print_aqi(&sensor).unwrap();
/// ```
pub trait AirQualitySensor {
    // --- Connection Management ---

    /// Pair using opaque, vendor-specific connection data.
    ///
    /// Returns `false` and leaves the sensor unconnected if the data is
    /// rejected.
    fn connect(&mut self, connection_data: &str) -> bool;

    /// Check if pairing has succeeded.
    fn is_connected(&self) -> bool;

    // --- Identity ---

    /// Record the room the sensor is placed in.
    ///
    /// Has no effect unless the sensor is connected.
    fn set_room_name(&mut self, room_name: &str);

    /// The last recorded room name, empty if never set.
    fn room_name(&self) -> &str;

    /// Short model label used in logs.
    fn model(&self) -> &str;

    // --- Readings ---

    /// Take a fresh reading.
    ///
    /// A connected sensor returns a reading whose first parameter is the
    /// AQI. A sensor that is not connected returns an empty reading rather
    /// than an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`](crate::Error::Parse) if the vendor payload
    /// cannot be decoded.
    fn get_data(&self) -> Result<Reading>;
}
