//! Column model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Task;

/// An ordered stage within a board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    /// Unique identifier for the column
    pub id: u64,

    /// ID of the owning board (fixed at creation)
    pub board_id: u64,

    /// Display title of the column
    pub title: String,

    /// Position of the column within its board (0-indexed, dense)
    pub order: u32,

    /// Display color as a CSS hex string
    pub color: String,

    /// Timestamp when the column was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the column was last modified (UTC)
    pub updated_at: Timestamp,

    /// Tasks in display order (loaded with the board, empty otherwise)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
}
