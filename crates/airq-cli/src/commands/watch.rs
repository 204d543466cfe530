//! Watch command implementation.
//!
//! The fleet is paired once; each pass re-reads every paired sensor.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use airq_cli::config::Config;
use airq_cli::fleet::pair_fleet;

use super::{ReportOptions, build_renderer};

/// Arguments for the watch command.
#[derive(Debug, Clone, Copy)]
pub struct WatchArgs {
    pub interval: u64,
    pub count: u32,
}

pub fn cmd_watch(config: &Config, opts: ReportOptions, args: WatchArgs) -> Result<()> {
    let WatchArgs { interval, count } = args;
    let renderer = build_renderer(config, opts.color)?;

    let fleet = pair_fleet(&config.sensors, opts.seed);
    if fleet.is_empty() {
        warn!("No sensors paired");
        return Ok(());
    }

    let mut passes: u32 = 0;
    loop {
        renderer.render_all(&fleet, opts.show_details)?;
        passes += 1;

        // Check if we've reached the count limit
        if count > 0 && passes >= count {
            info!("Completed {} reports", passes);
            return Ok(());
        }
        thread::sleep(Duration::from_secs(interval));
    }
}
