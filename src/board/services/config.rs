//! Board configuration.

use crate::board::domain::Priority;
use serde::Deserialize;

/// Storage key used by the original browser board.
pub const DEFAULT_STORAGE_KEY: &str = "zenkanban_tasks";

/// Configuration for a [`BoardService`](super::BoardService).
///
/// Every field has a default, so a partial JSON document is accepted.
///
/// # Examples
///
/// ```
/// use zenkanban::board::domain::Priority;
/// use zenkanban::board::services::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.storage_key, "zenkanban_tasks");
/// assert_eq!(config.default_priority, Priority::Medium);
///
/// let custom = BoardConfig::default().with_storage_key("team_board");
/// assert_eq!(custom.storage_key, "team_board");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Key under which the whole board is stored.
    pub storage_key: String,
    /// Priority given to new tasks when the caller does not pick one.
    pub default_priority: Priority,
}

impl BoardConfig {
    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Sets the default priority for new tasks.
    #[must_use]
    pub const fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            default_priority: Priority::default(),
        }
    }
}
