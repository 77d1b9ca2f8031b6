//! Validation gate deciding whether a draft may be committed.

use super::{DraftValidationError, TaskDraft, TaskFields, TaskTitle};

/// Validates a draft and normalises it into commit fields.
///
/// The trimmed title must be non-empty. Description, status and tags are
/// always acceptable; the description is trimmed and an empty tag selection
/// becomes absent.
///
/// # Errors
///
/// Returns [`DraftValidationError::EmptyTitle`] when the title is blank.
pub fn validate_draft(draft: &TaskDraft) -> Result<TaskFields, DraftValidationError> {
    let title = TaskTitle::new(draft.title())?;
    Ok(TaskFields {
        title,
        description: draft.description().trim().to_owned(),
        status: draft.status(),
        tags: draft.tags().clone().into_present(),
    })
}
