//! Output formatting for the interactive shell.

use crate::types::Task;

/// Banner printed once at startup.
pub const BANNER: &str = r"
 _____ ___  ____   ___
|_   _/ _ \|  _ \ / _ \
  | || | | | | | | | | |
  | || |_| | |_| | |_| |
  |_| \___/|____/ \___/
";

/// Menu shown once per loop iteration.
pub const MENU: &str = "\n1. Add task\n\
                        2. View tasks\n\
                        3. Mark task as completed\n\
                        4. Remove task\n\
                        5. Exit";

/// Render the task list with 1-based indices and completion markers.
///
/// Zero tasks render as a distinguishable empty message.
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks in the list!".to_string();
    }

    let mut out = String::from("\nTODO LIST:\n");
    for (i, task) in tasks.iter().enumerate() {
        out.push_str(&format!(
            "{}. [{}] {}\n",
            i + 1,
            task.marker(),
            task.description
        ));
    }
    out
}
