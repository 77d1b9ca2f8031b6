//! In-memory adapters.

mod board;
mod notifier;

pub use board::{InMemoryBoardError, InMemoryTaskBoard};
pub use notifier::{Notice, NoticeLevel, RecordingNotifier};
