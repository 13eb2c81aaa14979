//! Parameter structures for kanban operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives.
//! Interface layers wrap these types and add their own derives:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Params are deliberately loose: titles may be missing, statuses are plain
//! strings. They become fully-populated, validated values when converted into
//! the drafts and update requests in [`crate::models`].
//!
//! JSON schemas for the server boundary are generated when the `schema`
//! feature is enabled.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_board, show_task, delete_task, list_columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new board.
///
/// Every field is optional; the board is always seeded with the
/// "To Do", "In Progress" and "Done" columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateBoard {
    /// Title of the board (defaults to "Untitled Board")
    pub title: Option<String>,
    /// Optional description of the board
    pub description: Option<String>,
    /// Optional identifier of the owning user
    pub owner_id: Option<String>,
}

/// Parameters for updating a board's metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateBoard {
    /// Board ID to update (required)
    pub id: u64,
    /// New title (must not be empty)
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New owner identifier
    pub owner_id: Option<String>,
    /// Remove the description (cannot be combined with `description`)
    #[serde(default)]
    pub clear_description: bool,
    /// Remove the owner (cannot be combined with `owner_id`)
    #[serde(default)]
    pub clear_owner_id: bool,
}

/// Parameters for permanently deleting a board.
///
/// Deleting a board removes all of its columns and tasks, so the caller must
/// confirm explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteBoard {
    /// ID of the board to delete
    pub id: u64,
    /// Must be true for the deletion to proceed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for adding a column to a board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateColumn {
    /// ID of the board to add the column to
    pub board_id: u64,
    /// Title of the column (defaults to "New Column")
    pub title: Option<String>,
    /// Position to insert at (0-indexed). Appends when omitted.
    pub order: Option<u32>,
    /// Display color as a hex string (defaults to "#4ECDC4")
    pub color: Option<String>,
}

/// Parameters for updating a column's display fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateColumn {
    /// Column ID to update (required)
    pub id: u64,
    /// New title (must not be empty)
    pub title: Option<String>,
    /// New display color as a hex string
    pub color: Option<String>,
}

/// Parameters for repositioning a column within its board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveColumn {
    /// Column ID to move
    pub id: u64,
    /// Target position (0-indexed, less than the board's column count)
    pub order: u32,
}

/// Parameters for creating a task in a column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTask {
    /// ID of the column to place the task in
    pub column_id: u64,
    /// Board ID, checked against the column's board when supplied
    pub board_id: Option<u64>,
    /// Title of the task (defaults to "New Task")
    pub title: Option<String>,
    /// Optional detailed description
    pub description: Option<String>,
    /// Initial status ('todo', 'in_progress' or 'done'; defaults to 'todo')
    pub status: Option<String>,
    /// Priority ('low', 'medium', 'high' or 'urgent'; defaults to 'medium')
    pub priority: Option<String>,
    /// Position within the column (1-indexed). Appends when omitted.
    pub order: Option<u32>,
    /// Optional assignee label
    pub owner: Option<String>,
}

/// Parameters for updating a task's fields.
///
/// Placement (column and order) is changed through [`MoveTask`] instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateTask {
    /// Task ID to update (required)
    pub id: u64,
    /// New title (must not be empty)
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New status ('todo', 'in_progress' or 'done')
    pub status: Option<String>,
    /// New priority ('low', 'medium', 'high' or 'urgent')
    pub priority: Option<String>,
    /// New assignee label
    pub owner: Option<String>,
    /// Remove the description (cannot be combined with `description`)
    #[serde(default)]
    pub clear_description: bool,
    /// Unassign the task (cannot be combined with `owner`)
    #[serde(default)]
    pub clear_owner: bool,
}

/// Parameters for moving a task to a column and position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveTask {
    /// Task ID to move
    pub id: u64,
    /// Target column ID (may belong to another board)
    pub column_id: u64,
    /// Target position within the column (1-indexed)
    pub order: u32,
}

/// Parameters for listing tasks.
///
/// With neither `board_id` nor `column_id` every task is listed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTasks {
    /// Only tasks on this board
    pub board_id: Option<u64>,
    /// Only tasks in this column
    pub column_id: Option<u64>,
    /// Only tasks with this status
    pub status: Option<String>,
    /// Only tasks with this priority
    pub priority: Option<String>,
    /// Only tasks assigned to this owner
    pub owner: Option<String>,
}
