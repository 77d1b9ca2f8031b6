//! Notice configuration loading and use by dialogs.

use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use taskdeck::task::{
    adapters::memory::{InMemoryTaskBoard, NoticeLevel, RecordingNotifier},
    domain::TaskStatus,
    ports::{NoticeConfig, NoticeConfigError},
    services::TaskDialog,
};

#[rstest]
fn partial_config_falls_back_to_defaults() -> Result<(), eyre::Report> {
    let config = NoticeConfig::from_json(r#"{"task_updated": "Saved"}"#)?;

    eyre::ensure!(config.task_updated == "Saved", "override ignored");
    eyre::ensure!(
        config.task_created == NoticeConfig::default().task_created,
        "default not applied"
    );
    Ok(())
}

#[rstest]
fn malformed_config_is_rejected() {
    let result = NoticeConfig::from_json(r#"{"empty_title": 3}"#);
    assert!(matches!(result, Err(NoticeConfigError::Parse(_))));
}

#[rstest]
fn dialog_uses_configured_notices() -> Result<(), eyre::Report> {
    let board = Arc::new(InMemoryTaskBoard::new(Arc::new(DefaultClock)));
    let notifier = Arc::new(RecordingNotifier::new());
    let notices = NoticeConfig::from_json(
        r#"{"empty_title": "Title required", "task_created": "Added to board"}"#,
    )?;
    let mut dialog = TaskDialog::with_notices(Arc::clone(&board), Arc::clone(&notifier), notices);
    dialog.open_for_create(TaskStatus::Todo);

    eyre::ensure!(dialog.submit().is_err(), "blank title accepted");
    dialog.set_title("Ship");
    dialog.submit()?;

    eyre::ensure!(
        notifier.messages(NoticeLevel::Error) == vec!["Title required".to_owned()],
        "error notice text not configured"
    );
    eyre::ensure!(
        notifier.messages(NoticeLevel::Success) == vec!["Added to board".to_owned()],
        "success notice text not configured"
    );
    Ok(())
}
