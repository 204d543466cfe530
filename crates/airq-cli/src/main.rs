use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use airq_cli::config::{self, Config};

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{ReportOptions, WatchArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    // Logs go to stderr so stdout carries only the report
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config_path = config::resolve_path(cli.config.clone());
    let config = Config::load_from(&config_path);
    tracing::debug!("Using config: {}", config_path.display());

    let color = !(cli.no_color || config.no_color) && io::stdout().is_terminal();
    let seed = config::resolve_seed(cli.seed, &config);

    match cli.command {
        Commands::Report { report } => {
            let opts = ReportOptions {
                show_details: report.resolve_details(config.show_details),
                color,
                seed,
            };
            commands::cmd_report(&config, opts)?;
        }
        Commands::Watch {
            report,
            interval,
            count,
        } => {
            let opts = ReportOptions {
                show_details: report.resolve_details(config.show_details),
                color,
                seed,
            };
            commands::cmd_watch(&config, opts, WatchArgs { interval, count })?;
        }
        Commands::Config { action } => {
            commands::cmd_config(action, &config_path, &config)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "airq", &mut io::stdout());
        }
    }

    Ok(())
}
