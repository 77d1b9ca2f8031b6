//! Mutable working copy of a task while a dialog is open.

use super::{DraftValidationError, Tag, TagSelection, Task, TaskFields, TaskStatus, validation};
use serde::{Deserialize, Serialize};

/// Raw, unvalidated task fields as the user is typing them.
///
/// Setters store input verbatim. Trimming and the title check happen only in
/// [`TaskDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    title: String,
    description: String,
    status: TaskStatus,
    tags: TagSelection,
}

impl TaskDraft {
    /// Returns the create-mode defaults for a board column.
    #[must_use]
    pub const fn for_status(status: TaskStatus) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status,
            tags: TagSelection::new(),
        }
    }

    /// Copies the editable fields of an existing task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            status: task.status(),
            tags: task.tags().cloned().unwrap_or_default(),
        }
    }

    /// Returns the raw title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the selected status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the selected tags.
    #[must_use]
    pub const fn tags(&self) -> &TagSelection {
        &self.tags
    }

    /// Replaces the title verbatim.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description verbatim.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the status.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Deselects `tag` if selected, otherwise appends it to the selection.
    pub fn toggle_tag(&mut self, tag: Tag) {
        self.tags.toggle(tag);
    }

    /// Replaces the entire draft.
    pub fn reset(&mut self, defaults: Self) {
        *self = defaults;
    }

    /// Runs the validation gate and returns the normalised commit payload.
    ///
    /// # Errors
    ///
    /// Returns [`DraftValidationError::EmptyTitle`] when the trimmed title is
    /// empty.
    pub fn validate(&self) -> Result<TaskFields, DraftValidationError> {
        validation::validate_draft(self)
    }
}
