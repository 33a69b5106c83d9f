//! Then steps for drag-and-drop BDD scenarios.

use std::sync::Arc;

use super::world::{BoardWorld, TestBoardService};
use mockable::DefaultClock;
use rstest_bdd_macros::then;
use zenkanban::board::{
    domain::{TaskId, TaskStatus},
    services::BoardService,
};

#[then(r#"task "{id}" is in column "{column}""#)]
fn task_is_in_column(world: &BoardWorld, id: String, column: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let task = world
        .service()?
        .store()
        .get(&TaskId::from_string(id))
        .ok_or_else(|| eyre::eyre!("task missing from board"))?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected column {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the board order is "{order}""#)]
fn board_order_is(world: &BoardWorld, order: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = order.split(',').map(str::trim).collect();
    let actual: Vec<&str> = world
        .service()?
        .store()
        .tasks()
        .iter()
        .map(|task| task.id().as_str())
        .collect();

    if actual != expected {
        return Err(eyre::eyre!("expected order {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"task "{id}" is shown in the drag overlay"#)]
fn task_in_overlay(world: &BoardWorld, id: String) -> Result<(), eyre::Report> {
    let lifted = world
        .service()?
        .lifted_task()
        .ok_or_else(|| eyre::eyre!("no task is lifted"))?;

    if lifted.id().as_str() != id {
        return Err(eyre::eyre!("expected {id} in overlay, found {}", lifted.id()));
    }
    Ok(())
}

#[then("no task is lifted")]
fn no_task_lifted(world: &BoardWorld) -> Result<(), eyre::Report> {
    if let Some(task) = world.service()?.lifted_task() {
        return Err(eyre::eyre!("task {} is still lifted", task.id()));
    }
    Ok(())
}

#[then("the stored board matches the current board")]
fn stored_board_matches(world: &BoardWorld) -> Result<(), eyre::Report> {
    let reloaded: TestBoardService =
        BoardService::new(Arc::clone(&world.storage), Arc::new(DefaultClock));

    if reloaded.store() != world.service()?.store() {
        return Err(eyre::eyre!("stored board differs from the in-memory board"));
    }
    Ok(())
}
