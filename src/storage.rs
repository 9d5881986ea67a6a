//! JSON persistence for the task list.
//!
//! The on-disk format is a pretty-printed JSON array of
//! `{"task": string, "completed": bool}` objects with 2-space indentation.
//! Saves replace the whole file atomically: write to a temp file in the same
//! directory, then rename over the target.

use crate::types::Task;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Persistence adapter for a single JSON data file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create a storage handle for the given data file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list from disk.
    ///
    /// A missing file means no data yet and malformed content is treated as
    /// empty rather than refusing to start; both return an empty list. Any
    /// other I/O failure is returned to the caller.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No existing todo list found, starting fresh");
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        match serde_json::from_str(&text) {
            Ok(tasks) => {
                debug!(path = %self.path.display(), "Todo list loaded");
                Ok(tasks)
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Malformed todo list file, starting fresh"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Save the full task list, replacing the file atomically.
    ///
    /// The containing directory is created if absent. The list is written to
    /// a temp file in the same directory and renamed over the target so an
    /// interrupted write never leaves a half-written list behind.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create directory {}", dir.display()))?;
            }
        }

        let json =
            serde_json::to_string_pretty(tasks).context("Failed to serialize task list")?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes())
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        debug!(path = %self.path.display(), tasks = tasks.len(), "Todo list saved");
        Ok(())
    }
}
