//! Domain model for the kanban board.
//!
//! Tasks, their closed status and priority sets, the fixed column layout, and
//! the ordered store that holds them. Nothing here touches storage or logging.

mod column;
mod error;
mod ids;
mod store;
mod task;

pub use column::{COLUMNS, ColumnDefinition};
pub use error::{BoardDomainError, ParsePriorityError, ParseTaskStatusError};
pub use ids::TaskId;
pub use store::{DropTarget, TaskStore};
pub use task::{PersistedTaskData, Priority, Task, TaskContent, TaskStatus};
