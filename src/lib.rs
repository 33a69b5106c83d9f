//! Zenkanban: a single-board kanban engine.
//!
//! This crate provides the stateful core of a kanban board: an ordered task
//! store spread over three fixed columns, a two-phase drag-and-drop reducer,
//! a live search projection, and persistence of the whole board to a local
//! key-value byte store. Rendering is left to the host.
//!
//! # Architecture
//!
//! Zenkanban follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`board`]: Task store, drag reducer, filter view, and board service

pub mod board;
