//! Report command implementation.

use anyhow::Result;
use tracing::{info, warn};

use airq_cli::config::Config;
use airq_cli::fleet::pair_fleet;
use airq_core::RenderOutcome;

use super::{ReportOptions, build_renderer};

pub fn cmd_report(config: &Config, opts: ReportOptions) -> Result<()> {
    let renderer = build_renderer(config, opts.color)?;

    let fleet = pair_fleet(&config.sensors, opts.seed);
    if fleet.is_empty() {
        warn!("No sensors paired");
        return Ok(());
    }

    let outcomes = renderer.render_all(&fleet, opts.show_details)?;
    let rendered = outcomes
        .iter()
        .filter(|o| matches!(o, RenderOutcome::Rendered { .. }))
        .count();
    info!(
        "Reported {} of {} configured sensors",
        rendered,
        config.sensors.len()
    );
    Ok(())
}
