//! User configuration for emojihide.
//!
//! Settings are stored in `~/.emojihide/config.toml`. A missing file is
//! not an error: the built-in defaults apply.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Carrier used when nothing else is configured (U+1F60A).
pub const DEFAULT_CARRIER: char = '😊';

/// Errors that can occur when loading or saving the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// The configuration stored in TOML format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Visible character the hidden payload is attached to.
    #[serde(default = "default_carrier")]
    pub carrier: char,
}

fn default_carrier() -> char {
    DEFAULT_CARRIER
}

impl Default for Config {
    fn default() -> Self {
        Self {
            carrier: DEFAULT_CARRIER,
        }
    }
}

impl Config {
    /// Load the configuration from the default location.
    ///
    /// Returns the defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), carrier = %config.carrier.escape_unicode(), "loaded config");
        Ok(config)
    }

    /// Load the configuration, falling back to the defaults on any error.
    /// The error is logged as a warning.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config, using defaults");
                Self::default()
            }
        }
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save the configuration to an explicit path.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Get the path to the default configuration file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = get_config_dir()?;
        Ok(config_dir.join("config.toml"))
    }
}

/// Get the emojihide config directory (`~/.emojihide`).
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".emojihide"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Parses a carrier argument, which must be exactly one Unicode scalar value.
pub fn parse_carrier(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err("carrier cannot be empty".to_string()),
        (Some(_), Some(_)) => Err(format!(
            "carrier must be a single character, got {} characters",
            s.chars().count()
        )),
    }
}
