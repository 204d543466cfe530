//! Core types for normalized sensor readings.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameter names shared by every sensor adapter.
pub mod names {
    /// Overall air quality index. Always the first parameter of a reading.
    pub const AQI: &str = "AQI";
    /// Carbon dioxide concentration.
    pub const CO2: &str = "CO2";
    /// Ambient temperature.
    pub const TEMPERATURE: &str = "Temperature";
    /// Relative humidity.
    pub const HUMIDITY: &str = "Humidity";
}

/// Units attached to the well-known parameters.
pub mod units {
    /// The AQI is a dimensionless index.
    pub const NONE: &str = "";
    /// Parts per million.
    pub const PPM: &str = "ppm";
    /// Degrees Celsius.
    pub const CELSIUS: &str = "Celsius";
    /// Percent.
    pub const PERCENT: &str = "%";
}

/// One named physical measurement.
///
/// Parameters are immutable once constructed; use the accessors to read them.
///
/// # Examples
///
/// ```
/// use airq_types::Parameter;
///
/// let co2 = Parameter::new("CO2", 520, "ppm");
/// assert_eq!(co2.name(), "CO2");
/// assert_eq!(co2.value(), 520);
/// assert_eq!(co2.unit(), "ppm");
/// assert_eq!(co2.to_string(), "CO2 520 ppm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parameter {
    name: String,
    value: i32,
    unit: String,
}

impl Parameter {
    /// Create a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: i32, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
        }
    }

    /// Create the overall air quality index parameter.
    #[must_use]
    pub fn aqi(value: i32) -> Self {
        Self::new(names::AQI, value, units::NONE)
    }

    /// The parameter name, e.g. `"CO2"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The measured value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The unit label, empty for dimensionless values.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Whether this is the air quality index parameter.
    pub fn is_aqi(&self) -> bool {
        self.name == names::AQI
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{} {}", self.name, self.value)
        } else {
            write!(f, "{} {} {}", self.name, self.value, self.unit)
        }
    }
}

/// An ordered set of parameters returned by one sensor query.
///
/// When a reading is not empty, position 0 is the overall AQI and the
/// remaining parameters are supplementary measurements in vendor order.
/// An empty reading means the sensor had no data to report (for example
/// because it is not connected).
///
/// # Examples
///
/// ```
/// use airq_types::{Parameter, Reading};
///
/// let reading = Reading::new(vec![
///     Parameter::aqi(42),
///     Parameter::new("Humidity", 40, "%"),
/// ]);
/// assert_eq!(reading.aqi().map(|p| p.value()), Some(42));
/// assert_eq!(reading.details().len(), 1);
///
/// assert!(Reading::empty().aqi().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Reading {
    parameters: Vec<Parameter>,
}

impl Reading {
    /// Create a reading from parameters in display order.
    #[must_use]
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self { parameters }
    }

    /// A reading carrying no data.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the reading carries no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// The first parameter, whatever its name.
    pub fn first(&self) -> Option<&Parameter> {
        self.parameters.first()
    }

    /// The AQI parameter, if the reading is well formed.
    ///
    /// Returns `None` for an empty reading or when the first parameter is
    /// not named `AQI`.
    pub fn aqi(&self) -> Option<&Parameter> {
        self.first().filter(|p| p.is_aqi())
    }

    /// Every parameter after the first.
    pub fn details(&self) -> &[Parameter] {
        self.parameters.get(1..).unwrap_or(&[])
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// Iterate over the parameters in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.parameters.iter()
    }

    /// Consume the reading, returning its parameters.
    pub fn into_parameters(self) -> Vec<Parameter> {
        self.parameters
    }
}

impl From<Vec<Parameter>> for Reading {
    fn from(parameters: Vec<Parameter>) -> Self {
        Self::new(parameters)
    }
}

impl FromIterator<Parameter> for Reading {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Reading {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

impl IntoIterator for Reading {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.into_iter()
    }
}
