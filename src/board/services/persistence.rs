//! Mirrors the task store to a key-value byte store.

use crate::board::{
    domain::{PersistedTaskData, Priority, Task, TaskContent, TaskId, TaskStatus, TaskStore},
    ports::KeyValueStore,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while converting a task store to or from its stored form.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The stored value is not a valid task list.
    #[error("malformed board state: {0}")]
    Decode(#[source] serde_json::Error),
    /// The store could not be serialized.
    #[error("failed to encode board state: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Serializes the full store as a JSON array of task records.
///
/// # Errors
///
/// Returns [`PersistenceError::Encode`] when serialization fails.
pub fn encode(store: &TaskStore) -> Result<Vec<u8>, PersistenceError> {
    serde_json::to_vec(store).map_err(PersistenceError::Encode)
}

/// One stored task record as written by [`encode`].
///
/// A missing `priority` reads as the default priority and a missing
/// `createdAt` as the Unix epoch.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTask {
    id: TaskId,
    content: TaskContent,
    status: TaskStatus,
    #[serde(default)]
    priority: Priority,
    #[serde(default, with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

impl From<StoredTask> for PersistedTaskData {
    fn from(record: StoredTask) -> Self {
        Self {
            id: record.id,
            content: record.content,
            status: record.status,
            priority: record.priority,
            created_at: record.created_at,
        }
    }
}

/// Parses a stored JSON array of task records.
///
/// Each record is read on its own: a record that cannot be turned into a
/// task is skipped with a warning and the rest of the board is kept.
/// Duplicate identifiers are collapsed, keeping the first occurrence.
///
/// # Errors
///
/// Returns [`PersistenceError::Decode`] when the bytes are not a JSON array.
pub fn decode(bytes: &[u8]) -> Result<TaskStore, PersistenceError> {
    let records: Vec<serde_json::Value> =
        serde_json::from_slice(bytes).map_err(PersistenceError::Decode)?;
    let tasks: Vec<Task> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<StoredTask>(record) {
            Ok(stored) => Some(Task::from_persisted(stored.into())),
            Err(err) => {
                warn!(index, error = %err, "skipped unreadable task record");
                None
            }
        })
        .collect();
    let stored = tasks.len();
    let store = TaskStore::from_tasks(tasks);
    if store.len() < stored {
        warn!(
            dropped = stored - store.len(),
            "discarded tasks with duplicate identifiers"
        );
    }
    Ok(store)
}

/// Loads and saves the board under a single storage key.
#[derive(Debug)]
pub struct StorePersistence<S>
where
    S: KeyValueStore,
{
    storage: Arc<S>,
    key: String,
}

impl<S> StorePersistence<S>
where
    S: KeyValueStore,
{
    /// Creates a persistence adapter writing under `key`.
    #[must_use]
    pub fn new(storage: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored board.
    ///
    /// A missing entry is a first run and yields an empty store. Unreadable
    /// or malformed state is logged and also yields an empty store.
    #[must_use]
    pub fn load(&self) -> TaskStore {
        let bytes = match self.storage.get(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!(key = %self.key, "no stored board, starting empty");
                return TaskStore::new();
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to read stored board");
                return TaskStore::new();
            }
        };

        decode(&bytes).unwrap_or_else(|err| {
            warn!(key = %self.key, error = %err, "failed to load tasks, starting empty");
            TaskStore::new()
        })
    }

    /// Writes the full store, best-effort.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn save(&self, store: &TaskStore) {
        let bytes = match encode(store) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to encode tasks");
                return;
            }
        };
        if let Err(err) = self.storage.set(&self.key, &bytes) {
            warn!(key = %self.key, error = %err, "failed to save tasks");
        }
    }
}
