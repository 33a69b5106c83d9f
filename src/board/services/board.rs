//! Event-driven board service.
//!
//! Presentation code sends [`BoardEvent`] messages; the service turns each one
//! into a task store update, mirrors changed snapshots to storage, and exposes
//! the filtered per-column view.

use super::{
    BoardConfig, BoardView, DragReducer, DragSignal, DragState, StorePersistence, filter_view,
};
use crate::board::{
    domain::{BoardDomainError, Priority, Task, TaskContent, TaskId, TaskStatus, TaskStore},
    ports::KeyValueStore,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// User or drag engine intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// Create a task at the top of the `todo` column.
    AddTask {
        /// Task text; rejected when blank.
        content: String,
        /// Chosen priority, or the configured default.
        priority: Option<Priority>,
    },
    /// Delete a task.
    DeleteTask {
        /// Task to delete.
        id: TaskId,
    },
    /// Save an inline edit.
    EditContent {
        /// Task being edited.
        id: TaskId,
        /// New text; rejected when blank.
        content: String,
    },
    /// Move a task straight to a column.
    MoveTask {
        /// Task to move.
        id: TaskId,
        /// Destination column.
        status: TaskStatus,
    },
    /// Move a task one column to the left.
    MoveLeft {
        /// Task to move.
        id: TaskId,
    },
    /// Move a task one column to the right.
    MoveRight {
        /// Task to move.
        id: TaskId,
    },
    /// Replace the live search string.
    Search {
        /// New search string.
        query: String,
    },
    /// Forward a drag engine signal.
    Drag(DragSignal),
}

/// What a dispatched event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The task store changed and was written to storage.
    StoreChanged,
    /// Only presentation state changed (search string or lifted card).
    ViewChanged,
    /// Nothing changed.
    Unchanged,
}

/// Service-level errors for board events.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation declined the event.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service.
///
/// Owns the current task store snapshot and replaces it wholesale on every
/// change, so readers never observe a partial update.
pub struct BoardService<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    persistence: StorePersistence<S>,
    clock: Arc<C>,
    config: BoardConfig,
    store: TaskStore,
    search_query: String,
    drag: DragReducer,
}

impl<S, C> BoardService<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Creates a service with default configuration, loading the stored board.
    #[must_use]
    pub fn new(storage: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(storage, clock, BoardConfig::default())
    }

    /// Creates a service with custom configuration, loading the stored board.
    #[must_use]
    pub fn with_config(storage: Arc<S>, clock: Arc<C>, config: BoardConfig) -> Self {
        let persistence = StorePersistence::new(storage, config.storage_key.clone());
        let store = persistence.load();
        debug!(key = %persistence.key(), tasks = store.len(), "board loaded");
        Self {
            persistence,
            clock,
            config,
            store,
            search_query: String::new(),
            drag: DragReducer::new(),
        }
    }

    /// Returns the current task store snapshot.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Returns the live search string.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Returns the current drag state.
    #[must_use]
    pub const fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    /// Returns the task shown in the drag overlay, if a drag is in progress.
    #[must_use]
    pub fn lifted_task(&self) -> Option<&Task> {
        self.drag.lifted(&self.store)
    }

    /// Returns the per-column projection filtered by the search string.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        filter_view(&self.store, &self.search_query)
    }

    /// Handles one event to completion.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when task content is blank; the
    /// board is left unchanged.
    pub fn dispatch(&mut self, event: BoardEvent) -> BoardServiceResult<DispatchOutcome> {
        debug!(?event, "dispatching board event");
        let next = match event {
            BoardEvent::AddTask { content, priority } => {
                let validated = TaskContent::new(content)?;
                let chosen = priority.unwrap_or(self.config.default_priority);
                self.store.add(validated, chosen, &*self.clock)
            }
            BoardEvent::DeleteTask { id } => self.store.remove(&id),
            BoardEvent::EditContent { id, content } => {
                let validated = TaskContent::new(content)?;
                self.store.update_content(&id, validated)
            }
            BoardEvent::MoveTask { id, status } => self.store.set_status(&id, status),
            BoardEvent::MoveLeft { id } => self.step(&id, TaskStatus::previous),
            BoardEvent::MoveRight { id } => self.step(&id, TaskStatus::next),
            BoardEvent::Search { query } => return Ok(self.search(query)),
            BoardEvent::Drag(signal) => return Ok(self.apply_drag(&signal)),
        };
        Ok(self.commit(next))
    }

    fn step(&self, id: &TaskId, neighbour: fn(TaskStatus) -> Option<TaskStatus>) -> TaskStore {
        self.store
            .get(id)
            .and_then(|task| neighbour(task.status()))
            .map_or_else(|| self.store.clone(), |status| self.store.set_status(id, status))
    }

    fn search(&mut self, query: String) -> DispatchOutcome {
        if self.search_query == query {
            return DispatchOutcome::Unchanged;
        }
        self.search_query = query;
        DispatchOutcome::ViewChanged
    }

    fn apply_drag(&mut self, signal: &DragSignal) -> DispatchOutcome {
        let previous_state = self.drag.state().clone();
        match self.drag.apply(signal, &self.store) {
            Some(next) => self.commit(next),
            None if *self.drag.state() != previous_state => DispatchOutcome::ViewChanged,
            None => DispatchOutcome::Unchanged,
        }
    }

    fn commit(&mut self, next: TaskStore) -> DispatchOutcome {
        if next == self.store {
            return DispatchOutcome::Unchanged;
        }
        self.store = next;
        self.persistence.save(&self.store);
        DispatchOutcome::StoreChanged
    }
}
