//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Reusable report arguments
#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    /// Print only the AQI line for each sensor (overrides config)
    #[arg(long)]
    pub no_details: bool,
}

impl ReportArgs {
    /// Resolve details setting: explicit flag overrides config
    pub fn resolve_details(&self, config_show_details: bool) -> bool {
        !self.no_details && config_show_details
    }
}

#[derive(Parser)]
#[command(name = "airq")]
#[command(author, version, about = "Unified report for air-quality sensors", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Configuration file to use instead of the default location
    #[arg(short, long, global = true, env = "AIRQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for the simulated sensors, for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pair all configured sensors and print their readings once
    Report {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Pair once, then keep refreshing the readings
    Watch {
        #[command(flatten)]
        report: ReportArgs,

        /// Refresh interval in seconds
        #[arg(short, long, default_value = "10")]
        interval: u64,

        /// Number of reports to print before exiting (0 for unlimited)
        #[arg(short = 'n', long, default_value = "0")]
        count: u32,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
