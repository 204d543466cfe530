//! Platform-agnostic types for air-quality sensors.
//!
//! This crate provides the normalized data model shared by every sensor
//! adapter in airq-core and by the `airq` command-line tool.
//!
//! # Features
//!
//! - [`Parameter`]: one named, unit-tagged measurement
//! - [`Reading`]: the ordered parameters from one query, AQI first
//! - [`ParseError`]: failures while decoding a vendor payload
//!
//! # Example
//!
//! ```
//! use airq_types::{Parameter, Reading};
//!
//! let reading: Reading = vec![Parameter::aqi(65), Parameter::new("CO2", 2180, "ppm")].into();
//! assert_eq!(reading.len(), 2);
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{Parameter, Reading, names, units};
