//! Shared world state for task dialog BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdeck::task::{
    adapters::memory::{InMemoryTaskBoard, RecordingNotifier},
    domain::{Task, TaskId, TaskStatus},
    services::{DialogOutcome, TaskDialog, TaskDialogResult},
};

/// Board type used by the BDD world.
pub type TestBoard = InMemoryTaskBoard<DefaultClock>;

/// Scenario world for task dialog behaviour tests.
pub struct DialogWorld {
    pub board: Arc<TestBoard>,
    pub notifier: Arc<RecordingNotifier>,
    pub dialog: TaskDialog<TestBoard, RecordingNotifier>,
    pub stored_task: Option<Task>,
    pub last_submit: Option<TaskDialogResult<DialogOutcome>>,
    pub last_delete: Option<TaskDialogResult<TaskId>>,
}

impl DialogWorld {
    /// Creates a world with an empty board and a closed dialog.
    #[must_use]
    pub fn new() -> Self {
        let board = Arc::new(InMemoryTaskBoard::new(Arc::new(DefaultClock)));
        let notifier = Arc::new(RecordingNotifier::new());
        let dialog = TaskDialog::new(Arc::clone(&board), Arc::clone(&notifier));

        Self {
            board,
            notifier,
            dialog,
            stored_task: None,
            last_submit: None,
            last_delete: None,
        }
    }
}

impl Default for DialogWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DialogWorld {
    DialogWorld::default()
}

/// Parses a status string used in scenario text.
///
/// # Errors
///
/// Returns an error when `raw` is not a known status.
pub fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}
