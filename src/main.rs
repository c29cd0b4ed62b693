//! emojihide - Hide bytes inside a single character
//!
//! A CLI tool that hides data behind one visible character using
//! invisible Unicode variation selectors.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{
    AppContext, CommandExecutor, ConfigCommand, DecodeCommand, EncodeCommand, InteractiveCommand,
};

/// emojihide - Hide bytes inside a single character
///
/// Appends one invisible variation selector per byte after a visible carrier.
/// Run without a command for the interactive menu.
#[derive(Parser)]
#[command(name = "emojihide")]
#[command(version)]
#[command(about = "Hide bytes inside a single character using Unicode variation selectors")]
#[command(long_about = None)]
struct Cli {
    /// Path to the config file (default: ~/.emojihide/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message or file behind a carrier character
    Encode(EncodeCommand),

    /// Recover the bytes hidden behind a carrier character
    Decode(DecodeCommand),

    /// Interactive encode/decode menu
    Interactive(InteractiveCommand),

    /// Inspect and change persisted settings
    Config(ConfigCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "emojihide=debug" } else { "emojihide=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let ctx = AppContext::resolve(cli.config);

    match cli.command {
        Some(Commands::Encode(cmd)) => cmd.execute(&ctx),
        Some(Commands::Decode(cmd)) => cmd.execute(&ctx),
        Some(Commands::Interactive(cmd)) => cmd.execute(&ctx),
        Some(Commands::Config(cmd)) => cmd.execute(&ctx),
        None => InteractiveCommand::default().execute(&ctx),
    }
}
