//! Command implementations for the CLI.

mod config;
mod report;
mod watch;

pub use config::cmd_config;
pub use report::cmd_report;
pub use watch::{WatchArgs, cmd_watch};

use anyhow::{Context, Result};

use airq_cli::config::Config;
use airq_core::{AnsiStyler, PlainStyler, Renderer, Styler, Thresholds};

/// Settings shared by the reporting commands.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub show_details: bool,
    pub color: bool,
    pub seed: Option<u64>,
}

/// Build the renderer from config thresholds and the color setting.
fn build_renderer(config: &Config, color: bool) -> Result<Renderer<Box<dyn Styler>>> {
    let thresholds =
        Thresholds::new(config.thresholds).context("Invalid [thresholds] in config")?;
    let styler: Box<dyn Styler> = if color {
        Box::new(AnsiStyler)
    } else {
        Box::new(PlainStyler)
    };
    Ok(Renderer::new(styler).with_thresholds(thresholds))
}
