//! Interactive menu loop.
//!
//! Presents a numbered menu, reads one line per prompt and dispatches to the
//! task store. Prompts race stdin against Ctrl-C so an interrupt at any
//! prompt ends the session cleanly; EOF on stdin does the same.

use crate::error::{ErrorCode, StoreError, StoreResult};
use crate::format::{self, MENU};
use crate::store::TaskStore;
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

/// Interactive shell driving a task store.
pub struct Shell {
    store: TaskStore,
    lines: Lines<BufReader<Stdin>>,
}

impl Shell {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Run the menu loop until Exit, EOF, or Ctrl-C.
    pub async fn run(mut self) -> Result<()> {
        loop {
            println!("{}", MENU);
            let Some(choice) = self.prompt("\nEnter your choice (1-5): ").await? else {
                break;
            };

            let keep_going = match choice.trim() {
                "1" => self.add_task().await?,
                "2" => {
                    println!("{}", format::format_task_list(self.store.tasks()));
                    true
                }
                "3" => self.mark_completed().await?,
                "4" => self.remove_task().await?,
                "5" => false,
                other => {
                    debug!(choice = %other, "Invalid menu choice");
                    println!("Invalid choice! Please try again.");
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Prompt for a new task description and append it.
    async fn add_task(&mut self) -> Result<bool> {
        let Some(description) = self.prompt("Enter task: ").await? else {
            return Ok(false);
        };

        match self.store.add(description.clone()) {
            Ok(()) => println!("Task '{}' added successfully!", description),
            Err(e) if e.code == ErrorCode::Storage => {
                // The task is in the in-memory list; only the save failed.
                println!("Task '{}' added successfully!", description);
                println!("Error saving list: {}", e);
            }
            Err(e) => println!("{}", e),
        }
        Ok(true)
    }

    /// Prompt for a position and mark it completed.
    async fn mark_completed(&mut self) -> Result<bool> {
        println!("{}", format::format_task_list(self.store.tasks()));
        let Some(input) = self
            .prompt("Enter task number to mark as completed: ")
            .await?
        else {
            return Ok(false);
        };
        let position = match parse_position(&input) {
            Ok(position) => position,
            Err(e) => {
                debug!(error = %e, "Rejected position input");
                println!("Please enter a valid number!");
                return Ok(true);
            }
        };

        match self.store.mark_completed(position) {
            Ok(()) => println!("Task {} marked as completed!", position),
            Err(e) if e.code == ErrorCode::Storage => {
                println!("Task {} marked as completed!", position);
                println!("Error saving list: {}", e);
            }
            Err(e) => println!("{}", e),
        }
        Ok(true)
    }

    /// Prompt for a position and remove the task there.
    async fn remove_task(&mut self) -> Result<bool> {
        println!("{}", format::format_task_list(self.store.tasks()));
        let Some(input) = self.prompt("Enter task number to remove: ").await? else {
            return Ok(false);
        };
        let position = match parse_position(&input) {
            Ok(position) => position,
            Err(e) => {
                debug!(error = %e, "Rejected position input");
                println!("Please enter a valid number!");
                return Ok(true);
            }
        };

        match self.store.remove(position) {
            Ok(removed) => println!("Task '{}' removed successfully!", removed.description),
            Err(e) if e.code == ErrorCode::Storage => {
                // The task is gone from the in-memory list; only the save failed.
                println!("Task {} removed.", position);
                println!("Error saving list: {}", e);
            }
            Err(e) => println!("{}", e),
        }
        Ok(true)
    }

    /// Print a prompt and read one line, racing against Ctrl-C.
    ///
    /// Returns `None` when the session should end (interrupt or EOF).
    async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        print!("{}", text);
        std::io::stdout().flush()?;

        tokio::select! {
            line = self.lines.next_line() => Ok(line?),
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupt received at prompt");
                println!();
                Ok(None)
            }
        }
    }
}

/// Parse a 1-based task position; non-numeric input is rejected here,
/// aborting the operation.
///
/// Negative numbers and zero parse fine and are rejected by the store as
/// out-of-range positions.
fn parse_position(input: &str) -> StoreResult<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| StoreError::invalid_input(input))
}
