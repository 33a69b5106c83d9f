//! In-memory adapter implementations.
//!
//! Thread-safe stand-ins for browser storage, used by tests and by hosts that
//! do not need the board to outlive the process.

mod key_value;

pub use key_value::InMemoryKeyValueStore;
