//! Handler operations that return display wrappers or the deleted record.

use super::Kanban;
use crate::{
    display::{BoardSummaries, Columns, Tasks},
    error::{KanbanError, Result},
    models::{Board, Column, Task},
    params::{DeleteBoard, Id, ListTasks},
};

impl Kanban {
    /// Handle listing boards for display.
    pub async fn list_boards_summary(&self) -> Result<BoardSummaries> {
        self.list_boards().await.map(BoardSummaries)
    }

    /// Handle listing a board's columns for display.
    pub async fn list_columns_display(&self, params: &Id) -> Result<Columns> {
        self.list_columns(params).await.map(Columns)
    }

    /// Handle listing tasks for display.
    pub async fn list_tasks_display(&self, params: &ListTasks) -> Result<Tasks> {
        self.list_tasks(params).await.map(Tasks)
    }

    /// Handle permanently deleting a board with confirmation.
    ///
    /// Removes the board with all of its columns and tasks. The board as it
    /// was before deletion is returned so callers can show what was removed,
    /// or `None` if it did not exist or another writer deleted it first.
    ///
    /// # Errors
    ///
    /// Returns `KanbanError::InvalidInput` if `confirmed` is false
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use kanban_core::{params::DeleteBoard, KanbanBuilder};
    /// # async {
    /// let kanban = KanbanBuilder::new().build().await?;
    /// let params = DeleteBoard { id: 1, confirmed: true };
    /// let deleted = kanban.delete_board(&params).await?;
    /// # Result::<(), kanban_core::KanbanError>::Ok(())
    /// # };
    /// ```
    pub async fn delete_board(&self, params: &DeleteBoard) -> Result<Option<Board>> {
        if !params.confirmed {
            return Err(KanbanError::invalid_input("confirmed").with_reason(
                "Board deletion removes all of its columns and tasks. Set 'confirmed' to true to proceed.",
            ));
        }

        let board_id = params.id;
        self.run_blocking(move |db| {
            let Some(board) = db.get_board(board_id)? else {
                return Ok(None);
            };
            Ok(db.delete_board(board_id)?.then_some(board))
        })
        .await
    }

    /// Handle deleting a column and its tasks, returning the column as it was.
    pub async fn delete_column(&self, params: &Id) -> Result<Option<Column>> {
        let column_id = params.id;
        self.run_blocking(move |db| {
            let Some(column) = db.get_column(column_id)? else {
                return Ok(None);
            };
            Ok(db.delete_column(column_id)?.then_some(column))
        })
        .await
    }

    /// Handle deleting a task, returning the task as it was.
    pub async fn delete_task(&self, params: &Id) -> Result<Option<Task>> {
        let task_id = params.id;
        self.run_blocking(move |db| {
            let Some(task) = db.get_task(task_id)? else {
                return Ok(None);
            };
            Ok(db.delete_task(task_id)?.then_some(task))
        })
        .await
    }
}
