//! Building and pairing the configured sensor fleet.

use tracing::{debug, warn};

use airq_core::util::{fork_rng, seeded_rng};
use airq_core::{AirQualitySensor, PairingCoordinator, QrScanner, StaticDiscovery};

use crate::config::SensorConfig;

/// Build every configured sensor and pair it.
///
/// Sensors that refuse their connection data are logged and left out, so
/// the returned fleet holds only connected sensors with their room names set.
/// The same `seed` always yields the same fleet and the same readings.
pub fn pair_fleet(sensors: &[SensorConfig], seed: Option<u64>) -> Vec<Box<dyn AirQualitySensor>> {
    let mut rng = seeded_rng(seed);
    let scanner = PairingCoordinator::new(QrScanner::new(fork_rng(&mut rng)));

    let mut fleet = Vec::with_capacity(sensors.len());
    for entry in sensors {
        let mut sensor = entry.kind.build(fork_rng(&mut rng));

        let paired = match &entry.connection_data {
            Some(data) => PairingCoordinator::new(StaticDiscovery::new(data.as_str()))
                .pair(sensor.as_mut()),
            None => scanner.pair(sensor.as_mut()),
        };
        if !paired {
            warn!(room = %entry.room, kind = %entry.kind, "skipping sensor that failed to pair");
            continue;
        }

        sensor.set_room_name(&entry.room);
        debug!(room = %entry.room, kind = %entry.kind, "sensor paired");
        fleet.push(sensor);
    }
    fleet
}
