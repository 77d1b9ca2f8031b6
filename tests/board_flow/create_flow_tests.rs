//! Create-mode dialog flows against the in-memory board.

use super::helpers::{BoardFixture, board_fixture};
use rstest::rstest;
use taskdeck::task::{
    adapters::memory::NoticeLevel,
    domain::{Tag, TaskDraft, TaskStatus},
    services::{DialogOutcome, DialogState, TaskDialogError},
};

#[rstest]
fn padded_title_is_trimmed_and_tags_omitted(
    mut board_fixture: BoardFixture,
) -> Result<(), eyre::Report> {
    let BoardFixture {
        board,
        notifier,
        dialog,
    } = &mut board_fixture;
    dialog.open_for_create(TaskStatus::Todo);
    dialog.set_title(" Buy milk ");

    let outcome = dialog.submit()?;

    let DialogOutcome::Created(fields) = outcome else {
        eyre::bail!("expected create outcome, got {outcome:?}");
    };
    eyre::ensure!(fields.title.as_str() == "Buy milk", "title not trimmed");
    eyre::ensure!(fields.description.is_empty(), "description not empty");
    eyre::ensure!(fields.status == TaskStatus::Todo, "unexpected status");
    eyre::ensure!(fields.tags.is_none(), "empty tags must be absent");

    let stored = board.column(TaskStatus::Todo);
    eyre::ensure!(stored.len() == 1, "expected one stored task");
    eyre::ensure!(dialog.state() == DialogState::Closed, "dialog still open");
    eyre::ensure!(board.open_signals() == vec![false], "board not told about close");
    eyre::ensure!(
        notifier.messages(NoticeLevel::Success) == vec!["Task created successfully".to_owned()],
        "unexpected success notices"
    );
    Ok(())
}

#[rstest]
fn selected_tags_reach_the_board_in_selection_order(
    mut board_fixture: BoardFixture,
) -> Result<(), eyre::Report> {
    let dialog = &mut board_fixture.dialog;
    dialog.open_for_create(TaskStatus::Doing);
    dialog.toggle_tag(Tag::Design);
    dialog.toggle_tag(Tag::Dev);
    dialog.set_title("Design review");

    dialog.submit()?;

    let stored = board_fixture.board.column(TaskStatus::Doing);
    let task = stored
        .first()
        .ok_or_else(|| eyre::eyre!("expected a stored task"))?;
    let tags = task
        .tags()
        .ok_or_else(|| eyre::eyre!("expected tags to be present"))?;
    eyre::ensure!(tags.as_slice() == [Tag::Design, Tag::Dev], "tag order changed");
    eyre::ensure!(task.title().as_str() == "Design review", "title mismatch");
    Ok(())
}

#[rstest]
fn draft_is_reset_to_seed_column_after_commit(
    mut board_fixture: BoardFixture,
) -> Result<(), eyre::Report> {
    let dialog = &mut board_fixture.dialog;
    dialog.open_for_create(TaskStatus::Done);
    dialog.set_title("Archive");
    dialog.set_description("old cards");
    dialog.set_status(TaskStatus::Todo);
    dialog.toggle_tag(Tag::Testing);

    dialog.submit()?;

    eyre::ensure!(
        dialog.draft() == &TaskDraft::for_status(TaskStatus::Done),
        "draft not reset to seed defaults: {:?}",
        dialog.draft()
    );
    eyre::ensure!(
        board_fixture.board.column(TaskStatus::Todo).len() == 1,
        "task not stored in selected column"
    );
    Ok(())
}

#[rstest]
fn blank_title_keeps_dialog_open_and_board_untouched(mut board_fixture: BoardFixture) {
    let dialog = &mut board_fixture.dialog;
    dialog.open_for_create(TaskStatus::Todo);
    dialog.set_title("    ");
    dialog.set_description("kept");

    let result = dialog.submit();

    assert!(matches!(result, Err(TaskDialogError::Validation(_))));
    assert!(dialog.is_open());
    assert_eq!(dialog.draft().description(), "kept");
    assert!(board_fixture.board.tasks().is_empty());
    assert!(board_fixture.board.open_signals().is_empty());
    assert_eq!(
        board_fixture.notifier.messages(NoticeLevel::Error),
        vec!["Please enter a task title".to_owned()]
    );
    assert!(board_fixture.notifier.messages(NoticeLevel::Success).is_empty());
}

#[rstest]
fn rejected_submit_can_be_corrected_and_resubmitted(mut board_fixture: BoardFixture) {
    let dialog = &mut board_fixture.dialog;
    dialog.open_for_create(TaskStatus::Todo);

    assert!(dialog.submit().is_err());
    dialog.set_title("Second try");
    let outcome = dialog.submit();

    assert!(matches!(outcome, Ok(DialogOutcome::Created(_))));
    assert_eq!(board_fixture.board.tasks().len(), 1);
    assert_eq!(board_fixture.notifier.notices().len(), 2);
}
