//! CLI configuration (`lexlint.toml`).
//!
//! Configuration stays out of the core on purpose: the engine takes a
//! set of rules at call time, and this module is only the glue that
//! turns a TOML file into that set.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file probed in the working directory.
pub const CONFIG_FILE: &str = "lexlint.toml";

/// Top-level configuration for the lexlint CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rules to run, by name. `None` means the default set.
    #[serde(default)]
    pub rules: Option<Vec<String>>,

    /// File extensions picked up when walking directories.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
}

/// Errors loading or parsing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("Invalid config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Resolves the effective configuration.
    ///
    /// An explicit `--config` path must load; otherwise `lexlint.toml`
    /// in the working directory is used when present, and defaults
    /// apply when it is not.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be loaded.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = Path::new(CONFIG_FILE);
        if local.is_file() {
            tracing::debug!("Using config: {}", local.display());
            return Self::from_file(local);
        }

        Ok(Self::default())
    }

    /// Extensions to use for directory walks, with the Java default.
    #[must_use]
    pub fn extensions_or_default(&self) -> Vec<String> {
        self.extensions
            .clone()
            .unwrap_or_else(|| vec!["java".to_string()])
    }
}
