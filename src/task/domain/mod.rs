//! Domain model for the task draft lifecycle.
//!
//! The task domain models board-owned tasks, the draft a dialog edits, and
//! the validation gate between them, while keeping notification and storage
//! concerns outside of the domain boundary.

mod draft;
mod error;
mod ids;
mod status;
mod tag;
mod task;
mod validation;

pub use draft::TaskDraft;
pub use error::{DraftValidationError, ParseTagError, ParseTaskStatusError};
pub use ids::{TaskId, TaskTitle};
pub use status::TaskStatus;
pub use tag::{TAG_VOCABULARY, Tag, TagSelection};
pub use task::{PersistedTaskData, Task, TaskFields};
pub use validation::validate_draft;
