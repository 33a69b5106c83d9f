//! Filter view projection tests.

use super::store_of;
use crate::board::{
    domain::{TaskStatus, TaskStore},
    services::{BoardView, filter_view},
};
use rstest::{fixture, rstest};

#[fixture]
fn board() -> TaskStore {
    store_of(&[
        ("a", "Fix bug in parser", TaskStatus::Todo),
        ("b", "Write docs", TaskStatus::InProgress),
        ("c", "fix flaky test", TaskStatus::Done),
        ("d", "Plan sprint", TaskStatus::Todo),
    ])
}

fn visible(view: &BoardView<'_>, status: TaskStatus) -> Vec<String> {
    view.tasks_in(status)
        .iter()
        .map(|t| t.id().to_string())
        .collect()
}

#[rstest]
fn empty_query_is_identity_projection(board: TaskStore) {
    let view = filter_view(&board, "");

    for status in TaskStatus::ALL {
        let expected: Vec<String> = board.tasks_in(status).map(|t| t.id().to_string()).collect();
        assert_eq!(visible(&view, status), expected);
    }
}

#[rstest]
fn unmatched_query_empties_every_column(board: TaskStore) {
    let view = filter_view(&board, "deploy");
    assert!(view.columns().iter().all(|column| column.is_empty()));
}

#[rstest]
#[case("fix")]
#[case("FIX")]
#[case("Fix")]
fn matching_ignores_case(board: TaskStore, #[case] query: &str) {
    let view = filter_view(&board, query);

    assert_eq!(visible(&view, TaskStatus::Todo), vec!["a"]);
    assert_eq!(visible(&view, TaskStatus::InProgress), Vec::<String>::new());
    assert_eq!(visible(&view, TaskStatus::Done), vec!["c"]);
}

#[rstest]
fn columns_follow_board_order_with_counts(board: TaskStore) {
    let view = filter_view(&board, "");
    let summary: Vec<(&str, usize)> = view
        .columns()
        .iter()
        .map(|column| (column.definition.title, column.count()))
        .collect();

    assert_eq!(summary, vec![("To Do", 2), ("In Progress", 1), ("Done", 1)]);
}
