//! Filter types for querying tasks.

use std::str::FromStr;

use super::{TaskPriority, TaskStatus};
use crate::{params::ListTasks, KanbanError};

/// Filter options applied when listing tasks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    /// Only tasks on this board
    pub board_id: Option<u64>,

    /// Only tasks in this column
    pub column_id: Option<u64>,

    /// Only tasks with this status
    pub status: Option<TaskStatus>,

    /// Only tasks with this priority
    pub priority: Option<TaskPriority>,

    /// Only tasks assigned to this owner (exact match)
    pub owner: Option<String>,
}

impl TaskFilter {
    /// Filter matching every task on a board.
    pub fn for_board(board_id: u64) -> Self {
        Self {
            board_id: Some(board_id),
            ..Default::default()
        }
    }

    /// Filter matching every task in a column.
    pub fn for_column(column_id: u64) -> Self {
        Self {
            column_id: Some(column_id),
            ..Default::default()
        }
    }
}

impl TryFrom<&ListTasks> for TaskFilter {
    type Error = KanbanError;

    /// Parse list parameters into a typed filter.
    ///
    /// # Errors
    ///
    /// * `KanbanError::InvalidInput` - When status or priority strings are
    ///   not recognized
    fn try_from(params: &ListTasks) -> Result<Self, Self::Error> {
        let status = params
            .status
            .as_deref()
            .map(TaskStatus::from_str)
            .transpose()
            .map_err(|reason| KanbanError::invalid_input("status").with_reason(reason))?;
        let priority = params
            .priority
            .as_deref()
            .map(TaskPriority::from_str)
            .transpose()
            .map_err(|reason| KanbanError::invalid_input("priority").with_reason(reason))?;

        Ok(Self {
            board_id: params.board_id,
            column_id: params.column_id,
            status,
            priority,
            owner: params.owner.clone(),
        })
    }
}
