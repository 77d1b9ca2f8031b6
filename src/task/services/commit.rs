//! Commit handler turning validated drafts into board payloads.

use crate::task::{
    domain::{DraftValidationError, Task, TaskDraft, TaskFields, TaskId, TaskStatus},
    ports::{NoticeConfig, Notifier, TaskBoard},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Hands validated drafts to the board and reports the result to the user.
///
/// Each commit path calls the board entry point first, then the open/close
/// signal, then the success notice. A rejected draft produces only the error
/// notice.
#[derive(Clone)]
pub struct CommitHandler<B, N>
where
    B: TaskBoard,
    N: Notifier,
{
    board: Arc<B>,
    notifier: Arc<N>,
    notices: NoticeConfig,
}

impl<B, N> CommitHandler<B, N>
where
    B: TaskBoard,
    N: Notifier,
{
    /// Creates a commit handler.
    #[must_use]
    pub const fn new(board: Arc<B>, notifier: Arc<N>, notices: NoticeConfig) -> Self {
        Self {
            board,
            notifier,
            notices,
        }
    }

    /// Returns the notice texts in use.
    #[must_use]
    pub const fn notices(&self) -> &NoticeConfig {
        &self.notices
    }

    /// Commits a create-mode draft.
    ///
    /// On success the draft is reset to the defaults for `seed_status`, the
    /// column the dialog was opened from.
    ///
    /// # Errors
    ///
    /// Returns [`DraftValidationError`] when the draft fails validation. The
    /// draft is left untouched and nothing reaches the board.
    pub fn commit_create(
        &self,
        draft: &mut TaskDraft,
        seed_status: TaskStatus,
    ) -> Result<TaskFields, DraftValidationError> {
        let fields = self.validated(draft)?;
        info!(
            status = %fields.status,
            tag_count = fields.tags.as_ref().map_or(0, |tags| tags.len()),
            "creating task"
        );
        self.board.create_task(fields.clone());
        draft.reset(TaskDraft::for_status(seed_status));
        self.board.open_changed(false);
        self.notifier.notify_success(&self.notices.task_created);
        Ok(fields)
    }

    /// Commits an edit-mode draft over `original`.
    ///
    /// The draft is not reset.
    ///
    /// # Errors
    ///
    /// Returns [`DraftValidationError`] when the draft fails validation.
    pub fn commit_update(
        &self,
        draft: &TaskDraft,
        original: &Task,
    ) -> Result<Task, DraftValidationError> {
        let fields = self.validated(draft)?;
        let updated = original.with_fields(fields);
        info!(task_id = %updated.id(), status = %updated.status(), "updating task");
        self.board.update_task(updated.clone());
        self.board.open_changed(false);
        self.notifier.notify_success(&self.notices.task_updated);
        Ok(updated)
    }

    /// Signals a delete request for `original` without validating anything.
    ///
    /// The success notice is optimistic: removal itself belongs to the board,
    /// which receives the returned identifier from the host.
    pub fn request_delete(&self, original: &Task) -> TaskId {
        info!(task_id = %original.id(), "delete requested");
        self.board.open_changed(false);
        self.notifier.notify_success(&self.notices.task_deleted);
        original.id()
    }

    /// Signals the board that the dialog closed without a payload.
    pub fn dismiss(&self) {
        self.board.open_changed(false);
    }

    fn validated(&self, draft: &TaskDraft) -> Result<TaskFields, DraftValidationError> {
        draft.validate().inspect_err(|err| {
            warn!(error = %err, "rejected task draft");
            self.notifier.notify_error(&self.notices.empty_title);
        })
    }
}
