//! Notifier that records notices in memory.

use crate::task::ports::Notifier;
use std::sync::{Arc, PoisonError, RwLock};

/// Severity of a recorded notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Shown through `notify_error`.
    Error,
    /// Shown through `notify_success`.
    Success,
}

/// A notice as the user would have seen it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Notice severity.
    pub level: NoticeLevel,
    /// Notice text.
    pub message: String,
}

/// Thread-safe notifier keeping every notice in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<RwLock<Vec<Notice>>>,
}

impl RecordingNotifier {
    /// Creates a notifier with no recorded notices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all notices recorded so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the messages recorded at `level`.
    #[must_use]
    pub fn messages(&self, level: NoticeLevel) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|notice| notice.level == level)
            .map(|notice| notice.message)
            .collect()
    }

    fn record(&self, level: NoticeLevel, message: &str) {
        self.notices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notice {
                level,
                message: message.to_owned(),
            });
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.record(NoticeLevel::Error, message);
    }

    fn notify_success(&self, message: &str) {
        self.record(NoticeLevel::Success, message);
    }
}
