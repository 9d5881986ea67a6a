//! Configuration loading.
//!
//! A single optional YAML file, resolved highest precedence first:
//! 1. `--config <path>` CLI flag
//! 2. `TODO_CLI_CONFIG_PATH` environment variable
//! 3. `<config_dir>/todo-cli/config.yaml`
//!
//! A missing discovered file yields defaults. An explicitly requested file
//! that is missing or malformed is an error, unlike the data file, because
//! config problems should be loud.

use crate::paths::APP_DIR_NAME;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "TODO_CLI_CONFIG_PATH";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSON data file. Overrides the default location.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration, preferring an explicit CLI path over discovery.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = cli_path {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            return Self::from_file(path);
        }

        match Self::discover() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a YAML config file.
    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Discover the config file path from the environment or platform dirs.
    fn discover() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.yaml"))
    }
}
