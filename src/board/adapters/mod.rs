//! Adapter implementations for the board's key-value store port.

pub mod directory;
pub mod memory;
