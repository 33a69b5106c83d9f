//! Static column definitions.

use super::TaskStatus;

/// Display configuration for one board column.
///
/// Columns are fixed; they are neither persisted nor user-editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Status the column collects.
    pub status: TaskStatus,
    /// Human-readable header.
    pub title: &'static str,
    /// Accent colour name used for the header marker.
    pub accent: &'static str,
}

impl ColumnDefinition {
    /// Returns the drop-zone identifier of this column.
    #[must_use]
    pub const fn zone_id(&self) -> &'static str {
        self.status.as_str()
    }

    /// Returns the definition for `status`.
    #[must_use]
    pub fn for_status(status: TaskStatus) -> &'static Self {
        match status {
            TaskStatus::Todo => &COLUMNS[0],
            TaskStatus::InProgress => &COLUMNS[1],
            TaskStatus::Done => &COLUMNS[2],
        }
    }
}

/// The board's columns in display order.
pub static COLUMNS: [ColumnDefinition; 3] = [
    ColumnDefinition {
        status: TaskStatus::Todo,
        title: "To Do",
        accent: "blue",
    },
    ColumnDefinition {
        status: TaskStatus::InProgress,
        title: "In Progress",
        accent: "amber",
    },
    ColumnDefinition {
        status: TaskStatus::Done,
        title: "Done",
        accent: "emerald",
    },
];
