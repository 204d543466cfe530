//! Integration tests for airq-core
//!
//! These tests exercise the full pipeline through the public API only:
//! vendor simulation, pairing, normalization and rendering. All random
//! sources are seeded, so the tests are deterministic.

use airq_core::util::{fork_rng, seeded_rng};
use airq_core::{
    AirQualitySensor, AqiBand, IndexOnlySensorAdapter, MockSensorBuilder, PairingCoordinator,
    Parameter, QrScanner, RenderOutcome, Renderer, SensorKind, StaticDiscovery,
    StructuredSensorAdapter, parse_blob,
};

/// Build the demo fleet and pair every sensor.
fn paired_fleet(seed: u64) -> Vec<Box<dyn AirQualitySensor>> {
    let mut rng = seeded_rng(Some(seed));
    let pairing = PairingCoordinator::new(QrScanner::new(fork_rng(&mut rng)));

    [
        ("LivingRoom", SensorKind::Index),
        ("BadRoom", SensorKind::Index),
        ("OfficeRoom", SensorKind::Structured),
        ("KidsRoom1", SensorKind::Structured),
    ]
    .into_iter()
    .map(|(room, kind)| {
        let mut sensor = kind.build(fork_rng(&mut rng));
        assert!(pairing.pair(sensor.as_mut()), "{room} failed to pair");
        sensor.set_room_name(room);
        sensor
    })
    .collect()
}

fn render_to_string(sensor: &dyn AirQualitySensor, details: bool) -> (RenderOutcome, String) {
    let mut out = Vec::new();
    let outcome = Renderer::plain()
        .render_to(sensor, details, &mut out)
        .expect("writing to a Vec cannot fail");
    (outcome, String::from_utf8(out).expect("output is UTF-8"))
}

#[test]
fn test_fleet_renders_every_room() {
    let fleet = paired_fleet(2024);
    for sensor in &fleet {
        let (outcome, text) = render_to_string(sensor.as_ref(), true);
        assert!(matches!(outcome, RenderOutcome::Rendered { .. }));
        assert!(text.contains(sensor.room_name()));
        assert!(text.contains("AQI"));
    }
}

#[test]
fn test_structured_details_rendered() {
    let fleet = paired_fleet(7);
    let (_, text) = render_to_string(fleet[2].as_ref(), true);
    assert!(text.contains("CO2"));
    assert!(text.contains("Temperature"));
    assert!(text.contains("Humidity"));

    let (_, text) = render_to_string(fleet[0].as_ref(), true);
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn test_room_name_requires_connection() {
    let mut sensor = IndexOnlySensorAdapter::with_rng(seeded_rng(Some(1)));
    sensor.set_room_name("X");
    assert_eq!(sensor.room_name(), "");
    assert!(sensor.get_data().unwrap().is_empty());

    let pairing = PairingCoordinator::new(QrScanner::new(seeded_rng(Some(2))));
    assert!(pairing.pair(&mut sensor));
    assert_eq!(sensor.room_name(), "");
    sensor.set_room_name("X");
    assert_eq!(sensor.room_name(), "X");
}

#[test]
fn test_unpaired_sensor_renders_not_connected() {
    let pairing = PairingCoordinator::new(StaticDiscovery::new("no-password"));
    let mut sensor = StructuredSensorAdapter::with_rng(seeded_rng(Some(3)));
    assert!(!pairing.pair(&mut sensor));

    let (outcome, text) = render_to_string(&sensor, true);
    assert_eq!(outcome, RenderOutcome::NotConnected);
    assert!(text.contains("not connected"));
}

#[test]
fn test_compact_blob() {
    let values = parse_blob(
        r#"{"SensorType":"X","AirQualityIndex":65,"CO2Level":2180,"Temperature":21,"Humidity":23}"#,
    )
    .unwrap();
    let reading = StructuredSensorAdapter::normalize(values);
    let values: Vec<i32> = reading.iter().map(Parameter::value).collect();
    assert_eq!(values, [65, 2180, 21, 23]);
}

#[test]
fn test_living_room_report() {
    let sensor = MockSensorBuilder::new()
        .room_name("LivingRoom")
        .aqi(65)
        .build();
    let (outcome, text) = render_to_string(&sensor, true);
    assert_eq!(outcome, RenderOutcome::Rendered { band: AqiBand::Moderate });
    assert!(text.contains("LivingRoom"));
    assert!(text.contains("AQI"));
}

#[test]
fn test_same_seed_same_report() {
    let report = |seed| -> String {
        paired_fleet(seed)
            .iter()
            .map(|sensor| render_to_string(sensor.as_ref(), true).1)
            .collect()
    };
    assert_eq!(report(99), report(99));
}
