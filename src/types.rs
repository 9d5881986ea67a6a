//! Core types for the todo list.

use serde::{Deserialize, Serialize};

/// A single entry in the task list.
///
/// Field order matches the on-disk JSON format: `task` then `completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Short free-form description.
    #[serde(rename = "task")]
    pub description: String,
    /// Whether the task has been marked done.
    pub completed: bool,
}

impl Task {
    /// Create a new, not-yet-completed task.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    /// Checkbox marker used in list output.
    pub fn marker(&self) -> &'static str {
        if self.completed { "\u{2713}" } else { " " }
    }
}
