//! Given steps for drag-and-drop BDD scenarios.

use super::world::BoardWorld;
use mockable::{Clock, DefaultClock};
use rstest_bdd_macros::given;
use zenkanban::board::domain::{PersistedTaskData, Priority, Task, TaskContent, TaskId, TaskStatus};

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) {
    world.seed.clear();
    world.service = None;
}

#[given(r#"a task "{id}" titled "{title}" in column "{column}""#)]
fn task_in_column(
    world: &mut BoardWorld,
    id: String,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    world.seed.push(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_string(id),
        content: TaskContent::new(title)?,
        status,
        priority: Priority::Medium,
        created_at: DefaultClock.utc(),
    }));
    Ok(())
}
