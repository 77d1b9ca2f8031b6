//! Notification port for user-visible notices.
//!
//! Defines the notice surface dialogs report to, and the configurable texts
//! they report with.

use serde::Deserialize;
use thiserror::Error;

/// Port for surfacing short notices to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Shows an error notice.
    fn notify_error(&self, message: &str);

    /// Shows a success notice.
    fn notify_success(&self, message: &str);
}

/// Notice texts used by task dialogs.
///
/// Every field falls back to its default when omitted from a configuration
/// document.
///
/// # Examples
///
/// ```
/// use taskdeck::task::ports::NoticeConfig;
///
/// let config = NoticeConfig::from_json(r#"{"task_created": "Added"}"#)
///     .expect("valid notice config");
/// assert_eq!(config.task_created, "Added");
/// assert_eq!(config.empty_title, "Please enter a task title");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Error shown when a submit is rejected for a blank title.
    pub empty_title: String,
    /// Success shown after a create-mode commit.
    pub task_created: String,
    /// Success shown after an edit-mode commit.
    pub task_updated: String,
    /// Success shown after a delete request.
    pub task_deleted: String,
}

impl NoticeConfig {
    /// Parses a notice configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`NoticeConfigError::Parse`] when the document is not valid
    /// JSON or a field has the wrong type.
    pub fn from_json(document: &str) -> Result<Self, NoticeConfigError> {
        Ok(serde_json::from_str(document)?)
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            empty_title: "Please enter a task title".to_owned(),
            task_created: "Task created successfully".to_owned(),
            task_updated: "Task updated successfully".to_owned(),
            task_deleted: "Task deleted successfully".to_owned(),
        }
    }
}

/// Errors returned while loading notice configuration.
#[derive(Debug, Error)]
pub enum NoticeConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid notice configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
