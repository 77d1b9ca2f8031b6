//! Port contracts for the task draft lifecycle.
//!
//! Ports define the collaborator interfaces task dialogs hand their results
//! to.

pub mod board;
pub mod notifier;

pub use board::TaskBoard;
pub use notifier::{NoticeConfig, NoticeConfigError, Notifier};

#[cfg(test)]
pub use board::MockTaskBoard;
#[cfg(test)]
pub use notifier::MockNotifier;
