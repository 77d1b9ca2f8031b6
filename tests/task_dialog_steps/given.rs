//! Given steps for task dialog BDD scenarios.

use super::world::{DialogWorld, parse_status};
use mockable::{Clock, DefaultClock};
use rstest_bdd_macros::given;
use taskdeck::task::domain::{PersistedTaskData, Tag, TagSelection, Task, TaskId, TaskTitle};

#[given(r#"a create dialog opened from the "{status}" column"#)]
fn create_dialog_opened(world: &mut DialogWorld, status: String) -> Result<(), eyre::Report> {
    let seed_status = parse_status(&status)?;
    world.dialog.open_for_create(seed_status);
    Ok(())
}

#[given(r#"a stored task titled "{title}" with description "{description}" in "{status}" tagged "{tag}""#)]
fn stored_task(
    world: &mut DialogWorld,
    title: String,
    description: String,
    status: String,
    tag: String,
) -> Result<(), eyre::Report> {
    let parsed_tag =
        Tag::try_from(tag.as_str()).map_err(|err| eyre::eyre!("invalid tag in scenario: {err}"))?;
    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: TaskTitle::new(&title)?,
        description,
        status: parse_status(&status)?,
        tags: Some(TagSelection::from(vec![parsed_tag])),
        created_at: DefaultClock.utc(),
    });
    world.board.insert(task.clone());
    world.stored_task = Some(task);
    Ok(())
}

#[given("an edit dialog opened for the stored task")]
fn edit_dialog_opened(world: &mut DialogWorld) -> Result<(), eyre::Report> {
    let task = world
        .stored_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))?;
    world.dialog.open_for_edit(Some(task));
    Ok(())
}
