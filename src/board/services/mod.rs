//! Application services for the board.
//!
//! - [`persistence`]: loading and saving the task store
//! - [`drag`]: the two-phase drag-and-drop reducer
//! - [`filter`]: the per-column search projection
//! - [`board`]: the event-driven service tying them together

pub mod board;
pub mod config;
pub mod drag;
pub mod filter;
pub mod persistence;

pub use board::{
    BoardEvent, BoardService, BoardServiceError, BoardServiceResult, DispatchOutcome,
};
pub use config::{BoardConfig, DEFAULT_STORAGE_KEY};
pub use drag::{DragReducer, DragSignal, DragState};
pub use filter::{BoardView, ColumnView, filter_view, matches_query};
pub use persistence::{PersistenceError, StorePersistence, decode, encode};
