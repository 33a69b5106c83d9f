//! Unit tests for the board module.

mod filter_tests;

use crate::board::{
    domain::{PersistedTaskData, Priority, Task, TaskContent, TaskId, TaskStatus, TaskStore},
    ports::{KeyValueStore, StorageResult},
};
use chrono::{DateTime, Utc};
use mockall::mock;

mock! {
    pub Storage {}

    impl KeyValueStore for Storage {
        fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;
        fn set(&self, key: &str, value: &[u8]) -> StorageResult<()>;
    }
}

/// Builds validated content, panicking on blank test input.
fn content(text: &str) -> TaskContent {
    TaskContent::new(text).expect("test content should not be blank")
}

/// Builds a task with a fixed identifier and timestamp.
fn task(id: &str, text: &str, status: TaskStatus) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::from(id),
        content: content(text),
        status,
        priority: Priority::Medium,
        created_at: DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000)
            .expect("valid timestamp"),
    })
}

/// Builds a store from `(id, content, status)` triples in order.
fn store_of(entries: &[(&str, &str, TaskStatus)]) -> TaskStore {
    TaskStore::from_tasks(
        entries
            .iter()
            .map(|(id, text, status)| task(id, text, *status)),
    )
}

/// Returns the task identifiers of `store` in order.
fn ids(store: &TaskStore) -> Vec<&str> {
    store.tasks().iter().map(|t| t.id().as_str()).collect()
}
