//! When steps for drag-and-drop BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::when;
use zenkanban::board::{
    domain::TaskId,
    services::{BoardEvent, DragSignal},
};

fn send(world: &mut BoardWorld, signal: DragSignal) -> Result<(), eyre::Report> {
    world.service_mut()?.dispatch(BoardEvent::Drag(signal))?;
    Ok(())
}

#[when(r#"task "{id}" is lifted"#)]
fn task_is_lifted(world: &mut BoardWorld, id: String) -> Result<(), eyre::Report> {
    send(
        world,
        DragSignal::Start {
            active: TaskId::from_string(id),
        },
    )
}

#[when(r#"the lifted task "{id}" hovers over "{over}""#)]
fn lifted_task_hovers(
    world: &mut BoardWorld,
    id: String,
    over: String,
) -> Result<(), eyre::Report> {
    send(
        world,
        DragSignal::Over {
            active: TaskId::from_string(id),
            over: Some(over),
        },
    )
}

#[when(r#"task "{id}" is dropped on "{over}""#)]
fn task_is_dropped_on(
    world: &mut BoardWorld,
    id: String,
    over: String,
) -> Result<(), eyre::Report> {
    send(
        world,
        DragSignal::End {
            active: TaskId::from_string(id),
            over: Some(over),
        },
    )
}

#[when(r#"task "{id}" is dropped outside the board"#)]
fn task_is_dropped_outside(world: &mut BoardWorld, id: String) -> Result<(), eyre::Report> {
    send(
        world,
        DragSignal::End {
            active: TaskId::from_string(id),
            over: None,
        },
    )
}
