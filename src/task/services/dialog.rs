//! Open/closed lifecycle for task create and edit dialogs.

use super::CommitHandler;
use crate::task::{
    domain::{DraftValidationError, Tag, Task, TaskDraft, TaskFields, TaskId, TaskStatus},
    ports::{NoticeConfig, Notifier, TaskBoard},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// What a dialog was opened for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogSeed {
    /// Compose a new task in the given board column.
    Create {
        /// Column the "new task" action was invoked from.
        status: TaskStatus,
    },
    /// Edit an existing task.
    Edit(Task),
}

impl DialogSeed {
    /// Returns the draft a dialog starts from, or falls back to when a draft
    /// is discarded.
    #[must_use]
    pub fn defaults(&self) -> TaskDraft {
        match self {
            Self::Create { status } => TaskDraft::for_status(*status),
            Self::Edit(task) => TaskDraft::from_task(task),
        }
    }

    /// Returns the mode name used in log fields.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Edit(_) => "edit",
        }
    }
}

/// Dialog visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    /// Nothing is rendered and input is ignored.
    #[default]
    Closed,
    /// The draft accepts input.
    Open,
}

/// Payload emitted by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// A create-mode commit handed these fields to the board.
    Created(TaskFields),
    /// An edit-mode commit handed this task to the board.
    Updated(Task),
}

/// Errors returned by dialog operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TaskDialogError {
    /// The draft failed validation; the dialog stays open.
    #[error(transparent)]
    Validation(#[from] DraftValidationError),
    /// The operation requires an open dialog.
    #[error("task dialog is not open")]
    NotOpen,
    /// Delete was requested from a create-mode dialog.
    #[error("delete is only available when editing a task")]
    DeleteRequiresEditMode,
}

/// Result type for dialog operations.
pub type TaskDialogResult<T> = Result<T, TaskDialogError>;

/// Reusable dialog sequencing draft initialisation, editing and commit.
///
/// A dialog starts closed. Each open re-seeds the draft; each submit, cancel
/// or delete closes it again. The same instance can cycle any number of
/// times.
pub struct TaskDialog<B, N>
where
    B: TaskBoard,
    N: Notifier,
{
    committer: CommitHandler<B, N>,
    state: DialogState,
    seed: Option<DialogSeed>,
    draft: TaskDraft,
}

impl<B, N> TaskDialog<B, N>
where
    B: TaskBoard,
    N: Notifier,
{
    /// Creates a closed dialog using the default notice texts.
    #[must_use]
    pub fn new(board: Arc<B>, notifier: Arc<N>) -> Self {
        Self::with_notices(board, notifier, NoticeConfig::default())
    }

    /// Creates a closed dialog using custom notice texts.
    #[must_use]
    pub fn with_notices(board: Arc<B>, notifier: Arc<N>, notices: NoticeConfig) -> Self {
        Self {
            committer: CommitHandler::new(board, notifier, notices),
            state: DialogState::default(),
            seed: None,
            draft: TaskDraft::default(),
        }
    }

    /// Returns the current visibility.
    #[must_use]
    pub const fn state(&self) -> DialogState {
        self.state
    }

    /// Returns `true` when the dialog accepts input.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open)
    }

    /// Returns the seed of the most recent open, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<&DialogSeed> {
        self.seed.as_ref()
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Opens the dialog and initialises the draft from `seed`.
    ///
    /// Opening an already open dialog re-seeds the draft.
    pub fn open(&mut self, seed: DialogSeed) {
        self.draft.reset(seed.defaults());
        debug!(mode = seed.mode(), status = %self.draft.status(), "opened task dialog");
        self.seed = Some(seed);
        self.state = DialogState::Open;
    }

    /// Opens a create-mode dialog for the given column.
    pub fn open_for_create(&mut self, status: TaskStatus) {
        self.open(DialogSeed::Create { status });
    }

    /// Opens an edit-mode dialog for `task`.
    ///
    /// Without a task the dialog renders nothing: it ends up closed and
    /// ignores input until opened again.
    pub fn open_for_edit(&mut self, task: Option<Task>) {
        if let Some(target) = task {
            self.open(DialogSeed::Edit(target));
            return;
        }
        debug!("edit dialog has no task; staying closed");
        self.state = DialogState::Closed;
        self.seed = None;
        self.draft = TaskDraft::default();
    }

    /// Replaces the draft title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.mutate(|draft| draft.set_title(title));
    }

    /// Replaces the draft description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.mutate(|draft| draft.set_description(description));
    }

    /// Replaces the draft status.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.mutate(|draft| draft.set_status(status));
    }

    /// Toggles a tag in the draft selection.
    pub fn toggle_tag(&mut self, tag: Tag) {
        self.mutate(|draft| draft.toggle_tag(tag));
    }

    /// Closes the dialog and discards the draft.
    ///
    /// Does nothing when the dialog is already closed.
    pub fn cancel(&mut self) {
        if !self.is_open() {
            return;
        }
        if let Some(seed) = &self.seed {
            self.draft.reset(seed.defaults());
        }
        self.state = DialogState::Closed;
        debug!("cancelled task dialog");
        self.committer.dismiss();
    }

    /// Validates the draft and commits it.
    ///
    /// On success the dialog closes; in create mode the draft is also reset
    /// to the seed defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDialogError::NotOpen`] when the dialog is closed, or
    /// [`TaskDialogError::Validation`] when the title is blank, in which case
    /// the error notice has been shown and the dialog stays open.
    pub fn submit(&mut self) -> TaskDialogResult<DialogOutcome> {
        if !self.is_open() {
            return Err(TaskDialogError::NotOpen);
        }
        let outcome = match &self.seed {
            Some(DialogSeed::Create { status }) => {
                DialogOutcome::Created(self.committer.commit_create(&mut self.draft, *status)?)
            }
            Some(DialogSeed::Edit(task)) => {
                DialogOutcome::Updated(self.committer.commit_update(&self.draft, task)?)
            }
            None => return Err(TaskDialogError::NotOpen),
        };
        self.state = DialogState::Closed;
        Ok(outcome)
    }

    /// Closes an edit-mode dialog with a delete request.
    ///
    /// The draft is not validated. The returned identifier is the task the
    /// user asked to delete; removing it is up to the board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDialogError::NotOpen`] when the dialog is closed, or
    /// [`TaskDialogError::DeleteRequiresEditMode`] for create-mode dialogs.
    pub fn delete(&mut self) -> TaskDialogResult<TaskId> {
        if !self.is_open() {
            return Err(TaskDialogError::NotOpen);
        }
        let Some(DialogSeed::Edit(task)) = &self.seed else {
            return Err(TaskDialogError::DeleteRequiresEditMode);
        };
        let task_id = self.committer.request_delete(task);
        self.state = DialogState::Closed;
        Ok(task_id)
    }

    fn mutate(&mut self, apply: impl FnOnce(&mut TaskDraft)) {
        if self.is_open() {
            apply(&mut self.draft);
        } else {
            debug!("ignored draft input on closed task dialog");
        }
    }
}
