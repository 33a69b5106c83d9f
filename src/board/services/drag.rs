//! Drag-and-drop reducer.
//!
//! Translates drag engine signals into task store updates in two phases:
//! hovering re-parents the lifted task into whichever column it is over, and
//! only the drop commits its position. Keeping the reorder out of the hover
//! path stops the sequence from churning on every pointer move while the card
//! still jumps columns live.

use crate::board::domain::{DropTarget, Task, TaskId, TaskStore};
use tracing::debug;

/// Signal emitted by the drag engine.
///
/// `over` carries the raw identifier of the droppable under the pointer: a
/// column zone id, another task's id, or nothing when the pointer is outside
/// every drop zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSignal {
    /// A task card was lifted.
    Start {
        /// Lifted task.
        active: TaskId,
    },
    /// The lifted card moved.
    Over {
        /// Lifted task.
        active: TaskId,
        /// Droppable under the pointer.
        over: Option<String>,
    },
    /// The lifted card was released.
    End {
        /// Lifted task.
        active: TaskId,
        /// Droppable under the pointer at release.
        over: Option<String>,
    },
}

/// Whether a card is currently lifted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The given task is being dragged.
    Dragging(TaskId),
}

/// State machine driving drag-and-drop updates.
#[derive(Debug, Clone, Default)]
pub struct DragReducer {
    state: DragState,
}

impl DragReducer {
    /// Creates an idle reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Returns the current drag state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns the lifted task as it currently appears in `store`, for the
    /// drag overlay.
    #[must_use]
    pub fn lifted<'a>(&self, store: &'a TaskStore) -> Option<&'a Task> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(id) => store.get(id),
        }
    }

    /// Applies a signal, returning the updated store when it changed.
    pub fn apply(&mut self, signal: &DragSignal, store: &TaskStore) -> Option<TaskStore> {
        match signal {
            DragSignal::Start { active } => {
                self.start(active, store);
                None
            }
            DragSignal::Over { active, over } => Self::over(active, over.as_deref(), store),
            DragSignal::End { active, over } => self.end(active, over.as_deref(), store),
        }
    }

    /// Marks `active` as lifted. Unknown identifiers leave the reducer idle.
    pub fn start(&mut self, active: &TaskId, store: &TaskStore) {
        if store.contains(active) {
            debug!(task = %active, "drag started");
            self.state = DragState::Dragging(active.clone());
        } else {
            debug!(task = %active, "ignoring drag start for unknown task");
        }
    }

    /// Moves the lifted task into the column it hovers over.
    ///
    /// Hovering a column zone adopts that column; hovering another task
    /// adopts that task's column. Position in the sequence is untouched.
    /// Returns `None` when nothing changes.
    #[must_use]
    pub fn over(active: &TaskId, over: Option<&str>, store: &TaskStore) -> Option<TaskStore> {
        let over_id = over?;
        let current = store.get(active)?;
        let target_status = match store.resolve_drop_target(over_id)? {
            DropTarget::Column(status) => status,
            DropTarget::Task(id) => store.get(&id)?.status(),
        };
        if current.status() == target_status {
            return None;
        }
        debug!(task = %active, status = %target_status, "drag moved task to column");
        Some(store.set_status(active, target_status))
    }

    /// Ends the drag and commits the drop position.
    ///
    /// The lifted marker is always cleared. When the drop lands on another
    /// task, the lifted task is moved to that task's index in the full
    /// sequence. Drops outside any zone, onto a column zone, or onto the
    /// lifted task itself keep the current order.
    pub fn end(
        &mut self,
        active: &TaskId,
        over: Option<&str>,
        store: &TaskStore,
    ) -> Option<TaskStore> {
        self.state = DragState::Idle;
        let over_id = over?;
        if over_id == active.as_str() {
            return None;
        }
        let active_index = store.position(active)?;
        let over_index = store.position(&TaskId::from(over_id))?;
        debug!(task = %active, from = active_index, to = over_index, "drag dropped task");
        let reordered = store.reorder(active_index, over_index);
        (reordered != *store).then_some(reordered)
    }
}
