//! Board model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Column;

/// Represents a board with its metadata and, when loaded, its columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Board {
    /// Unique identifier for the board
    pub id: u64,

    /// Title of the board (never empty)
    pub title: String,

    /// Optional multi-line description of the board
    pub description: Option<String>,

    /// Identifier of the owning user, if one has been assigned
    pub owner_id: Option<String>,

    /// Timestamp when the board was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the board or any of its children was last modified (UTC)
    pub updated_at: Timestamp,

    /// Columns in display order (loaded by `get_board`, empty in listings)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Column>,
}

impl Board {
    /// Total number of tasks across the loaded columns.
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }

    /// Finds a loaded column by its title.
    pub fn column_titled(&self, title: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.title == title)
    }
}
