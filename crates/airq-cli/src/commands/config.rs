//! Config command implementation.

use std::path::Path;

use anyhow::{Result, bail};

use airq_cli::config::Config;

use crate::cli::ConfigAction;

pub fn cmd_config(action: ConfigAction, path: &Path, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save_to(path)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }
    Ok(())
}
