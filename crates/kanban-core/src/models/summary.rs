//! Board summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Board, TaskStatus};

/// Summary information about a board with column and task statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardSummary {
    /// Board ID
    pub id: u64,
    /// Title of the board
    pub title: String,
    /// Description of the board
    pub description: Option<String>,
    /// Owner of the board
    pub owner_id: Option<String>,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Number of columns on the board
    pub column_count: u32,
    /// Number of tasks across all columns
    pub task_count: u32,
    /// Number of tasks whose status is done
    pub done_count: u32,
}

impl From<&Board> for BoardSummary {
    fn from(board: &Board) -> Self {
        let tasks = board.columns.iter().flat_map(|column| column.tasks.iter());
        let (task_count, done_count) = tasks.fold((0u32, 0u32), |(total, done), task| {
            (
                total + 1,
                done + u32::from(task.status == TaskStatus::Done),
            )
        });

        Self {
            id: board.id,
            title: board.title.clone(),
            description: board.description.clone(),
            owner_id: board.owner_id.clone(),
            created_at: board.created_at,
            updated_at: board.updated_at,
            column_count: board.columns.len() as u32,
            task_count,
            done_count,
        }
    }
}
