//! Air-quality sensor adapters and console rendering.
//!
//! This crate unifies two incompatible (simulated) air-quality sensor SDKs
//! behind the [`AirQualitySensor`] trait, pairs them through a mocked
//! discovery flow, and renders their readings to a console.
//!
//! # Features
//!
//! - **Vendor simulations**: an index-only sensor and a sensor reporting a
//!   structured text payload
//! - **Adapters**: normalize both vendors onto an ordered [`Reading`]
//! - **Pairing**: QR-code style discovery handing connection data to sensors
//! - **Rendering**: aligned console reports with AQI severity colors
//! - **Test support**: [`MockSensor`] with fixed readings and failure injection
//!
//! # Supported Sensors
//!
//! | Adapter | Parameters |
//! |---------|------------|
//! | [`IndexOnlySensorAdapter`] | AQI |
//! | [`StructuredSensorAdapter`] | AQI, CO2 (ppm), Temperature (Celsius), Humidity (%) |
//!
//! # Quick Start
//!
//! ```
//! use airq_core::{AirQualitySensor, PairingCoordinator, QrScanner, Renderer, SensorKind};
//! use airq_core::util::{fork_rng, seeded_rng};
//!
//! let mut rng = seeded_rng(Some(7));
//! let pairing = PairingCoordinator::new(QrScanner::new(fork_rng(&mut rng)));
//!
//! let mut sensor = SensorKind::Structured.build(fork_rng(&mut rng));
//! if pairing.pair(sensor.as_mut()) {
//!     sensor.set_room_name("OfficeRoom");
//! }
//!
//! let mut out = Vec::new();
//! Renderer::plain().render_to(sensor.as_ref(), true, &mut out)?;
//! assert!(String::from_utf8_lossy(&out).contains("OfficeRoom : AQI"));
//! # Ok::<(), airq_core::Error>(())
//! ```

pub mod adapter;
pub mod blob;
pub mod display;
pub mod error;
pub mod mock;
pub mod pairing;
pub mod thresholds;
pub mod traits;
pub mod util;
pub mod vendor;

// Re-export types module from airq-types
pub use airq_types::types;

// Core exports
pub use adapter::{IndexOnlySensorAdapter, SensorKind, StructuredSensorAdapter};
pub use blob::{BlobField, BlobValues, extract_field, parse_blob};
pub use display::{AnsiStyler, PlainStyler, RenderOutcome, Renderer, Styler};
pub use error::{Error, Result};
pub use mock::{MockSensor, MockSensorBuilder};
pub use pairing::{DiscoverySource, PairingCoordinator, QrScanner, StaticDiscovery};
pub use thresholds::{AqiBand, ThresholdConfig, Thresholds};
pub use traits::AirQualitySensor;

// Re-export from airq-types
pub use airq_types::{Parameter, ParseError, Reading, names, units};
