//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.
//! Commands are thin adapters: all byte <-> selector work lives in the library.

mod config;
mod decode;
mod encode;
mod interactive;

pub use config::ConfigCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use interactive::InteractiveCommand;

use std::path::PathBuf;

use anyhow::Result;
use tracing::warn;

use emojihide::Config;

/// State shared by every command, resolved once in `main`.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Loaded configuration (defaults if the file is missing or unreadable).
    pub config: Config,
    /// Where the configuration was loaded from and will be saved to.
    /// `None` when no path was given and the home directory is unknown.
    pub config_path: Option<PathBuf>,
}

impl AppContext {
    /// Resolves the config path and loads it. Never fails.
    pub fn resolve(explicit_path: Option<PathBuf>) -> Self {
        let config_path = explicit_path.or_else(|| match Config::config_path() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, "no config location, using defaults");
                None
            }
        });

        let config = config_path
            .as_deref()
            .map(Config::load_or_default)
            .unwrap_or_default();

        Self {
            config,
            config_path,
        }
    }

    /// Picks the carrier: an explicit flag wins over the configured one.
    pub fn carrier(&self, flag: Option<char>) -> char {
        flag.unwrap_or(self.config.carrier)
    }
}

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Drops a single trailing `\n` or `\r\n`.
pub(crate) fn strip_line_ending(data: &mut Vec<u8>) {
    if data.last() == Some(&b'\n') {
        data.pop();
        if data.last() == Some(&b'\r') {
            data.pop();
        }
    }
}
