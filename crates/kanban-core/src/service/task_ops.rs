//! Task operations for the Kanban service.

use super::Kanban;
use crate::{
    error::Result,
    models::{Task, TaskDraft, TaskFilter, UpdateTaskRequest},
    params::{CreateTask, Id, ListTasks, MoveTask, UpdateTask},
};

impl Kanban {
    /// Creates a task in a column. Returns `None` when the column does not
    /// exist.
    pub async fn create_task(&self, params: &CreateTask) -> Result<Option<Task>> {
        let draft = TaskDraft::try_from(params.clone())?;
        self.run_blocking(move |db| db.create_task(&draft)).await
    }

    /// Retrieves a single task.
    pub async fn get_task(&self, params: &Id) -> Result<Option<Task>> {
        let task_id = params.id;
        self.run_blocking(move |db| db.get_task(task_id)).await
    }

    /// Lists tasks matching the optional board, column, status, priority and
    /// owner constraints.
    pub async fn list_tasks(&self, params: &ListTasks) -> Result<Vec<Task>> {
        let filter = TaskFilter::try_from(params)?;
        self.run_blocking(move |db| db.list_tasks(&filter)).await
    }

    /// Lists every task on a board.
    pub async fn list_tasks_by_board(&self, params: &Id) -> Result<Vec<Task>> {
        let board_id = params.id;
        self.run_blocking(move |db| db.list_tasks_by_board(board_id))
            .await
    }

    /// Lists a column's tasks in order.
    pub async fn list_tasks_by_column(&self, params: &Id) -> Result<Vec<Task>> {
        let column_id = params.id;
        self.run_blocking(move |db| db.list_tasks_by_column(column_id))
            .await
    }

    /// Updates a task's title, description, status, priority or owner.
    pub async fn update_task(&self, params: &UpdateTask) -> Result<Option<Task>> {
        let task_id = params.id;
        let request = UpdateTaskRequest::try_from(params.clone())?;
        self.run_blocking(move |db| db.update_task(task_id, &request))
            .await
    }

    /// Moves a task to a position in a column, possibly on another board.
    pub async fn move_task(&self, params: &MoveTask) -> Result<Option<Task>> {
        let MoveTask {
            id,
            column_id,
            order,
        } = *params;
        self.run_blocking(move |db| db.move_task(id, column_id, order))
            .await
    }

    /// Renumbers a column's tasks to `1..n`.
    pub async fn compact_column(&self, params: &Id) -> Result<Option<Vec<Task>>> {
        let column_id = params.id;
        self.run_blocking(move |db| db.compact_column(column_id)).await
    }

    /// Deletes a task and closes the gap it leaves.
    pub async fn delete_task_by_id(&self, params: &Id) -> Result<bool> {
        let task_id = params.id;
        self.run_blocking(move |db| db.delete_task(task_id)).await
    }
}
