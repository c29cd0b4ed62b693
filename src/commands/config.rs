//! Config command - inspect and change persisted settings.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use emojihide::config::parse_carrier;

use super::{AppContext, CommandExecutor};

/// Inspect and change persisted settings.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Print the path of the configuration file
    Path,

    /// Set the default carrier character
    SetCarrier {
        /// Exactly one character, e.g. an emoji without modifiers
        #[arg(value_parser = parse_carrier)]
        carrier: char,
    },
}

impl CommandExecutor for ConfigCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        match &self.action {
            ConfigAction::Show => {
                let carrier = ctx.config.carrier;
                match &ctx.config_path {
                    Some(path) => println!("Config file: {}", path.display()),
                    None => println!("Config file: (none, home directory not found)"),
                }
                println!("  Carrier: {} ({})", carrier, carrier.escape_unicode());
            }
            ConfigAction::Path => {
                println!("{}", require_path(ctx)?.display());
            }
            ConfigAction::SetCarrier { carrier } => {
                let path = require_path(ctx)?;
                let mut config = ctx.config.clone();
                config.carrier = *carrier;
                config
                    .save_to(path)
                    .with_context(|| format!("Failed to save config to {}", path.display()))?;
                println!("Carrier set to {} ({})", carrier, carrier.escape_unicode());
            }
        }

        Ok(())
    }
}

/// Returns the config path, or an error telling the user to pass --config.
fn require_path(ctx: &AppContext) -> Result<&Path> {
    ctx.config_path
        .as_deref()
        .context("Home directory not found. Use --config <PATH> to choose a config file")
}
