//! Example: Pairing and Reading a Sensor
//!
//! This example pairs one simulated sensor of the requested kind through
//! the mocked QR scanner and prints a few readings.
//!
//! Run with: `cargo run --example read_sensor -- [index|structured] [SEED]`

use std::env;

use airq_core::util::{fork_rng, seeded_rng};
use airq_core::{AirQualitySensor, PairingCoordinator, QrScanner, Renderer, SensorKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let kind: SensorKind = match args.get(1) {
        Some(kind) => kind.parse()?,
        None => SensorKind::Structured,
    };
    let seed = args.get(2).map(|s| s.parse::<u64>()).transpose()?;

    let mut rng = seeded_rng(seed);
    let pairing = PairingCoordinator::new(QrScanner::new(fork_rng(&mut rng)));
    let mut sensor = kind.build(fork_rng(&mut rng));

    println!("Pairing {} sensor...", kind);
    if !pairing.pair(sensor.as_mut()) {
        eprintln!("Pairing failed");
        std::process::exit(1);
    }
    sensor.set_room_name("Demo");
    println!("Connected!");

    // Raw parameters
    let reading = sensor.get_data()?;
    println!();
    println!("Current Readings:");
    for param in &reading {
        println!("  {}", param);
    }

    // Formatted report
    let renderer = Renderer::ansi();
    for _ in 0..3 {
        renderer.render(sensor.as_ref(), true)?;
    }

    Ok(())
}
