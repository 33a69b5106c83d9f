//! Kanban board: task store, persistence, drag-and-drop, and search.
//!
//! The board keeps an ordered list of tasks spread over three fixed columns.
//! Every change yields a fresh store snapshot that is mirrored in full to a
//! key-value byte store. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
