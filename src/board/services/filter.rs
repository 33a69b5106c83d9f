//! Per-column search projection of the task store.

use crate::board::domain::{COLUMNS, ColumnDefinition, Task, TaskStatus, TaskStore};

/// Tasks visible in one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    /// Column the tasks belong to.
    pub definition: &'static ColumnDefinition,
    /// Matching tasks in board order.
    pub tasks: Vec<&'a Task>,
}

impl ColumnView<'_> {
    /// Returns the number of visible tasks, shown in the column header.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when no task in this column matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Filtered projection of the whole board, one entry per column in display
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    columns: Vec<ColumnView<'a>>,
}

impl<'a> BoardView<'a> {
    /// Returns all columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnView<'a>] {
        &self.columns
    }

    /// Returns the view of a single column.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&ColumnView<'a>> {
        self.columns
            .iter()
            .find(|column| column.definition.status == status)
    }

    /// Returns the visible tasks of a single column.
    #[must_use]
    pub fn tasks_in(&self, status: TaskStatus) -> &[&'a Task] {
        self.column(status)
            .map(|column| column.tasks.as_slice())
            .unwrap_or_default()
    }
}

/// Returns `true` when `task` content contains `query`, ignoring case.
#[must_use]
pub fn matches_query(task: &Task, query: &str) -> bool {
    task.content()
        .as_str()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Projects `store` into per-column lists of tasks matching `query`.
///
/// An empty query keeps every task.
#[must_use]
pub fn filter_view<'a>(store: &'a TaskStore, query: &str) -> BoardView<'a> {
    let columns = COLUMNS
        .iter()
        .map(|definition| ColumnView {
            definition,
            tasks: store
                .tasks_in(definition.status)
                .filter(|task| matches_query(task, query))
                .collect(),
        })
        .collect();
    BoardView { columns }
}
