//! In-memory task store with save-on-mutation persistence.

use crate::error::{StoreError, StoreResult};
use crate::storage::JsonStorage;
use crate::types::Task;
use anyhow::Result;
use tracing::warn;

/// Ordered task list bound to a persistence adapter.
///
/// Positions are 1-based and shift when earlier tasks are removed. Every
/// mutation triggers a full save; a failed save is reported but never rolls
/// back the in-memory change, so memory stays authoritative for the rest of
/// the session.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: JsonStorage,
}

impl TaskStore {
    /// Create an empty store bound to the given storage.
    pub fn new(storage: JsonStorage) -> Self {
        Self {
            tasks: Vec::new(),
            storage,
        }
    }

    /// Load the store from the storage adapter's backing file.
    ///
    /// Missing and malformed files both yield an empty store; other I/O
    /// failures are returned so the caller can report them and fall back to
    /// an empty in-memory list.
    pub fn load(storage: JsonStorage) -> Result<Self> {
        let tasks = storage.load()?;
        Ok(Self { tasks, storage })
    }

    /// Ordered view of the current tasks.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task and save.
    ///
    /// The append itself always succeeds; an `ErrorCode::Storage` error
    /// means only the save failed and the task is in the list.
    pub fn add(&mut self, description: impl Into<String>) -> StoreResult<()> {
        self.tasks.push(Task::new(description));
        self.autosave()
    }

    /// Mark the task at a 1-based position completed and save.
    ///
    /// Out-of-range positions are rejected without mutating the list. An
    /// `ErrorCode::Storage` error means the flag was set but the save failed.
    pub fn mark_completed(&mut self, position: i64) -> StoreResult<()> {
        let index = self.index(position)?;
        self.tasks[index].completed = true;
        self.autosave()
    }

    /// Remove the task at a 1-based position and save; later tasks shift
    /// down by one. Returns the removed task.
    ///
    /// Out-of-range positions are rejected without mutating the list. An
    /// `ErrorCode::Storage` error means the task was removed but the save
    /// failed.
    pub fn remove(&mut self, position: i64) -> StoreResult<Task> {
        let index = self.index(position)?;
        let removed = self.tasks.remove(index);
        self.autosave()?;
        Ok(removed)
    }

    /// Validate a 1-based position against the current list length.
    fn index(&self, position: i64) -> StoreResult<usize> {
        if position >= 1 && position as usize <= self.tasks.len() {
            Ok(position as usize - 1)
        } else {
            Err(StoreError::invalid_position(position, self.tasks.len()))
        }
    }

    /// Write the full list to disk after a mutation.
    fn autosave(&self) -> StoreResult<()> {
        if let Err(e) = self.storage.save(&self.tasks) {
            warn!(error = %e, "Failed to save todo list; in-memory state kept");
            return Err(StoreError::storage(format!("{:#}", e)));
        }
        Ok(())
    }
}
