//! Ordered, immutable task collection backing the board.

use super::{Priority, Task, TaskContent, TaskId, TaskStatus};
use mockable::Clock;
use serde::Serialize;
use std::collections::HashSet;

/// What a drag-engine identifier refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A column drop zone.
    Column(TaskStatus),
    /// Another task card.
    Task(TaskId),
}

/// Ordered sequence of tasks with unique identifiers.
///
/// Order is significant: it decides where a task appears within its column.
/// Every operation leaves `self` untouched and returns a new snapshot, so two
/// snapshots can be compared with `==` to detect a change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<Task>")]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Builds a store from tasks, keeping the first task for each identifier.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut seen = HashSet::new();
        let unique = tasks
            .into_iter()
            .filter(|task| seen.insert(task.id().clone()))
            .collect();
        Self { tasks: unique }
    }

    /// Returns the tasks in board order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the first task, which is the most recently added one unless
    /// a drag moved something in front of it.
    #[must_use]
    pub fn first(&self) -> Option<&Task> {
        self.tasks.first()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the index of a task in the full sequence.
    #[must_use]
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Returns `true` when a task with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.position(id).is_some()
    }

    /// Iterates over the tasks of one column in board order.
    pub fn tasks_in(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.status() == status)
    }

    /// Resolves a drag-engine identifier.
    ///
    /// Column zone identifiers take precedence over task identifiers.
    #[must_use]
    pub fn resolve_drop_target(&self, zone_id: &str) -> Option<DropTarget> {
        if let Some(status) = TaskStatus::from_zone_id(zone_id) {
            return Some(DropTarget::Column(status));
        }
        self.tasks
            .iter()
            .find(|task| task.id().as_str() == zone_id)
            .map(|task| DropTarget::Task(task.id().clone()))
    }

    /// Prepends a new `todo` task.
    ///
    /// The new task is available as [`TaskStore::first`] on the result.
    #[must_use]
    pub fn add(&self, content: TaskContent, priority: Priority, clock: &impl Clock) -> Self {
        let mut task = Task::new(content, priority, clock);
        while self.contains(task.id()) {
            task.reassign_id();
        }
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.push(task);
        tasks.extend(self.tasks.iter().cloned());
        Self { tasks }
    }

    /// Removes the task with `id`; unchanged when it is absent.
    #[must_use]
    pub fn remove(&self, id: &TaskId) -> Self {
        let tasks = self
            .tasks
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect();
        Self { tasks }
    }

    /// Replaces the content of the task with `id`; unchanged when absent.
    #[must_use]
    pub fn update_content(&self, id: &TaskId, content: TaskContent) -> Self {
        self.update_task(id, |task| task.replace_content(content))
    }

    /// Moves the task with `id` to another column without changing its
    /// position in the sequence; unchanged when absent.
    #[must_use]
    pub fn set_status(&self, id: &TaskId, status: TaskStatus) -> Self {
        self.update_task(id, |task| task.set_status(status))
    }

    /// Removes the task at `from` and reinserts it at `to`.
    ///
    /// Intervening tasks shift by one. A `from` past the end leaves the
    /// sequence unchanged; a `to` past the end is clamped to the last slot.
    #[must_use]
    pub fn reorder(&self, from: usize, to: usize) -> Self {
        if from >= self.tasks.len() {
            return self.clone();
        }
        let target = to.min(self.tasks.len() - 1);
        if from == target {
            return self.clone();
        }
        let mut tasks = self.tasks.clone();
        let task = tasks.remove(from);
        tasks.insert(target, task);
        Self { tasks }
    }

    fn update_task(&self, id: &TaskId, apply: impl FnOnce(&mut Task)) -> Self {
        let mut tasks = self.tasks.clone();
        if let Some(task) = tasks.iter_mut().find(|task| task.id() == id) {
            apply(task);
        }
        Self { tasks }
    }
}

impl From<TaskStore> for Vec<Task> {
    fn from(store: TaskStore) -> Self {
        store.tasks
    }
}
