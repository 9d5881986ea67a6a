//! Data file path resolution.
//!
//! The backing file location is resolved once at startup, highest
//! precedence first:
//! 1. `--file` CLI flag
//! 2. `TODO_CLI_DATA_FILE` environment variable
//! 3. `data_file` from the config file
//! 4. `<data_dir>/todo-cli/todo.json`
//!
//! Pure resolution, no filesystem I/O.

use crate::config::Config;
use std::path::{Path, PathBuf};

/// Filename of the backing JSON file.
pub const DATA_FILE_NAME: &str = "todo.json";

/// Directory name under the platform data/config dirs.
pub const APP_DIR_NAME: &str = "todo-cli";

/// Environment variable overriding the data file path.
pub const DATA_FILE_ENV: &str = "TODO_CLI_DATA_FILE";

/// Resolve the data file path from CLI override, environment, config, and
/// the platform default, in that order.
pub fn resolve_data_file(cli_override: Option<&Path>, config: &Config) -> PathBuf {
    if let Some(path) = cli_override {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(DATA_FILE_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(ref path) = config.data_file {
        return path.clone();
    }

    default_data_file()
}

/// Default location: `<data_dir>/todo-cli/todo.json`, falling back to the
/// system temp directory when no platform data dir is known.
pub fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join(DATA_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ends_with_app_dir_and_filename() {
        let path = default_data_file();
        assert!(path.ends_with("todo-cli/todo.json"));
    }

    #[test]
    fn resolution_precedence() {
        let mut config = Config::default();
        config.data_file = Some(PathBuf::from("/from/config/todo.json"));

        // CLI override wins over everything, including the environment.
        // SAFETY: tests touching the env var live in this one function so
        // they cannot race each other.
        unsafe {
            std::env::set_var(DATA_FILE_ENV, "/from/env/todo.json");
        }
        let cli = PathBuf::from("/from/cli/todo.json");
        assert_eq!(resolve_data_file(Some(&cli), &config), cli);

        // Environment beats config.
        assert_eq!(
            resolve_data_file(None, &config),
            PathBuf::from("/from/env/todo.json")
        );

        // Config beats the default.
        unsafe {
            std::env::remove_var(DATA_FILE_ENV);
        }
        assert_eq!(
            resolve_data_file(None, &config),
            PathBuf::from("/from/config/todo.json")
        );

        // Nothing set falls back to the default.
        assert_eq!(
            resolve_data_file(None, &Config::default()),
            default_data_file()
        );
    }
}
