//! Task model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{TaskPriority, TaskStatus};

/// A unit of work placed in exactly one column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the board owning the task's column. Always equal to the
    /// column's `board_id`; recomputed whenever the task changes column.
    pub board_id: u64,

    /// ID of the column holding the task
    pub column_id: u64,

    /// Brief title of the task
    pub title: String,

    /// Detailed multi-line description of the task
    pub description: Option<String>,

    /// Current status of the task
    pub status: TaskStatus,

    /// Priority of the task
    pub priority: TaskPriority,

    /// Position of the task within its column (1-indexed)
    pub order: u32,

    /// Assignee label, if the task has been assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last updated (UTC)
    pub updated_at: Timestamp,
}
