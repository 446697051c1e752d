//! User configuration.
//!
//! Loaded from `config.toml` in the user's config directory
//! (`~/.config/zcalc/config.toml` on Linux) or from an explicit path.
//! A missing default file means defaults; a missing explicit file is an
//! error.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "zcalc";
const CONFIG_FILE: &str = "config.toml";

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("failed to parse config file '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Show the pending operator after the previous operand.
    pub show_operation: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_operation: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClipboardConfig {
    /// Copy every evaluation result to the system clipboard.
    pub copy_on_evaluate: bool,
}

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub display: DisplayConfig,
    pub clipboard: ClipboardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            display: DisplayConfig::default(),
            clipboard: ClipboardConfig::default(),
        }
    }
}

impl Config {
    /// Default config location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// The file `load` reads: `explicit` if given, else the default
    /// location when a file exists there.
    pub fn source_path(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|path| path.exists()),
        }
    }

    /// Load configuration.
    ///
    /// With `explicit` set, that file must exist. Otherwise the default
    /// location is tried and defaults are used when nothing is there.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::source_path(explicit) {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Read and parse a single config file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
