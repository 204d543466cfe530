//! Mocked sensor pairing.
//!
//! Pairing takes connection data from a [`DiscoverySource`] (in the demo,
//! a [`QrScanner`] reading the label on the sensor) and hands it to the
//! sensor's [`connect`](AirQualitySensor::connect). There is a single
//! attempt and the result is passed through unchanged.
//!
//! # Example
//!
//! ```
//! use airq_core::{AirQualitySensor, IndexOnlySensorAdapter, PairingCoordinator, QrScanner};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let pairing = PairingCoordinator::new(QrScanner::new(StdRng::seed_from_u64(1)));
//! let mut sensor = IndexOnlySensorAdapter::with_rng(StdRng::seed_from_u64(2));
//!
//! if pairing.pair(&mut sensor) {
//!     sensor.set_room_name("LivingRoom");
//! }
//! assert_eq!(sensor.room_name(), "LivingRoom");
//! ```

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, warn};

use crate::traits::AirQualitySensor;

/// Supplies opaque connection data for a sensor.
pub trait DiscoverySource {
    /// Produce the data to pass to [`AirQualitySensor::connect`].
    fn connection_data(&self) -> String;
}

/// Simulated QR code scanner.
///
/// Every scan yields a MAC-like address with two random trailing digits
/// followed by the demo password, e.g. `00:11:22:33:44:57pwd123`.
pub struct QrScanner {
    rng: RefCell<Box<dyn RngCore>>,
}

impl std::fmt::Debug for QrScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QrScanner").finish_non_exhaustive()
    }
}

impl Default for QrScanner {
    fn default() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl QrScanner {
    /// Address prefix shared by all demo sensors.
    pub const ADDRESS_PREFIX: &'static str = "00:11:22:33:44:";

    /// Create a scanner drawing addresses from `rng`.
    pub fn new(rng: impl RngCore + 'static) -> Self {
        Self {
            rng: RefCell::new(Box::new(rng)),
        }
    }
}

impl DiscoverySource for QrScanner {
    fn connection_data(&self) -> String {
        let suffix: u8 = self.rng.borrow_mut().random_range(0..100);
        format!(
            "{}{}pwd{}",
            Self::ADDRESS_PREFIX,
            suffix,
            crate::vendor::DEVICE_PASSWORD
        )
    }
}

/// A discovery source that always yields the same data.
///
/// Used for credentials entered by hand and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDiscovery(String);

impl StaticDiscovery {
    pub fn new(connection_data: impl Into<String>) -> Self {
        Self(connection_data.into())
    }
}

impl DiscoverySource for StaticDiscovery {
    fn connection_data(&self) -> String {
        self.0.clone()
    }
}

/// Drives the discovery-and-connect handshake.
#[derive(Debug, Default)]
pub struct PairingCoordinator<D> {
    discovery: D,
}

impl<D: DiscoverySource> PairingCoordinator<D> {
    /// Create a coordinator using `discovery` for connection data.
    pub fn new(discovery: D) -> Self {
        Self { discovery }
    }

    /// The discovery source in use.
    pub fn discovery(&self) -> &D {
        &self.discovery
    }

    /// Pair `sensor`, returning whether it accepted the connection data.
    pub fn pair(&self, sensor: &mut dyn AirQualitySensor) -> bool {
        let connection_data = self.discovery.connection_data();
        debug!(model = sensor.model(), "pairing with {}", connection_data);

        let paired = sensor.connect(&connection_data);
        if !paired {
            warn!(model = sensor.model(), "pairing failed");
        }
        paired
    }
}
