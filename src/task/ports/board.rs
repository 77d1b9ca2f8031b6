//! Board port receiving committed tasks and dialog visibility changes.

use crate::task::domain::{Task, TaskFields};

/// Board contract consumed by task dialogs.
///
/// Entry points are infallible from the dialog's point of view; a board that
/// persists tasks handles its own storage failures.
#[cfg_attr(test, mockall::automock)]
pub trait TaskBoard: Send + Sync {
    /// Creation entry point, invoked once per successful create-mode commit.
    fn create_task(&self, fields: TaskFields);

    /// Update entry point, invoked once per successful edit-mode commit with
    /// a complete task that keeps the original identity.
    fn update_task(&self, task: Task);

    /// Open/close signal, invoked whenever cancel, submit or delete changes
    /// dialog visibility.
    fn open_changed(&self, open: bool);
}
