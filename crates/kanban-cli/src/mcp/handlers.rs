//! MCP tool handlers implementation
//!
//! Core params already carry serde and JSON schema derives (through the
//! `schema` feature of `kanban-core`), so tools take them directly. Each
//! handler renders the same display types the CLI prints.

use kanban_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    params::{
        CreateBoard, CreateColumn, CreateTask, DeleteBoard, Id, ListTasks, MoveColumn, MoveTask,
        UpdateBoard, UpdateColumn, UpdateTask,
    },
    Kanban, KanbanError,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};

use super::errors::to_mcp_error;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        body.to_string(),
    )]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    kanban: Kanban,
}

impl McpHandlers {
    pub fn new(kanban: Kanban) -> Self {
        Self { kanban }
    }

    // ------------------------------------------------------------------
    // Boards
    // ------------------------------------------------------------------

    pub async fn create_board(&self, Parameters(params): Parameters<CreateBoard>) -> McpResult {
        debug!("create_board: {params:?}");

        let board = self
            .kanban
            .create_board(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to create board", &e))?;

        text(CreateResult::new(board))
    }

    pub async fn list_boards(&self) -> McpResult {
        debug!("list_boards");

        let boards = self
            .kanban
            .list_boards_summary()
            .await
            .map_err(|e| to_mcp_error("Failed to list boards", &e))?;

        text(format!("# Boards\n\n{boards}"))
    }

    pub async fn get_board(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("get_board: {params:?}");

        let board = self
            .kanban
            .get_board(&params)
            .await
            .and_then(|b| b.ok_or(KanbanError::BoardNotFound { id: params.id }))
            .map_err(|e| to_mcp_error("Failed to get board", &e))?;

        text(board)
    }

    pub async fn update_board(&self, Parameters(params): Parameters<UpdateBoard>) -> McpResult {
        debug!("update_board: {params:?}");

        let board = self
            .kanban
            .update_board(&params)
            .await
            .and_then(|b| b.ok_or(KanbanError::BoardNotFound { id: params.id }))
            .map_err(|e| to_mcp_error("Failed to update board", &e))?;

        text(UpdateResult::new(board))
    }

    pub async fn delete_board(&self, Parameters(params): Parameters<DeleteBoard>) -> McpResult {
        debug!("delete_board: {params:?}");

        let board = self
            .kanban
            .delete_board(&params)
            .await
            .and_then(|b| b.ok_or(KanbanError::BoardNotFound { id: params.id }))
            .map_err(|e| to_mcp_error("Failed to delete board", &e))?;

        text(DeleteResult::new(board))
    }

    // ------------------------------------------------------------------
    // Columns
    // ------------------------------------------------------------------

    pub async fn create_column(&self, Parameters(params): Parameters<CreateColumn>) -> McpResult {
        debug!("create_column: {params:?}");

        let column = self
            .kanban
            .create_column(&params)
            .await
            .and_then(|c| {
                c.ok_or(KanbanError::BoardNotFound {
                    id: params.board_id,
                })
            })
            .map_err(|e| to_mcp_error("Failed to create column", &e))?;

        text(CreateResult::new(column))
    }

    pub async fn list_columns(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("list_columns: {params:?}");

        let columns = self
            .kanban
            .list_columns_display(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to list columns", &e))?;

        text(format!("# Columns on board {}\n\n{columns}", params.id))
    }

    pub async fn update_column(&self, Parameters(params): Parameters<UpdateColumn>) -> McpResult {
        debug!("update_column: {params:?}");

        let column = self
            .kanban
            .update_column(&params)
            .await
            .and_then(|c| c.ok_or(KanbanError::ColumnNotFound { id: params.id }))
            .map_err(|e| to_mcp_error("Failed to update column", &e))?;

        text(UpdateResult::new(column))
    }

    pub async fn move_column(&self, Parameters(params): Parameters<MoveColumn>) -> McpResult {
        debug!("move_column: {params:?}");

        let column = self
            .kanban
            .move_column(&params)
            .await
            .and_then(|c| c.ok_or(KanbanError::ColumnNotFound { id: params.id }))
            .map_err(|e| to_mcp_error("Failed to move column", &e))?;

        let change = format!("Moved to position {}", params.order);
        text(UpdateResult::with_changes(column, vec![change]))
    }

    pub async fn delete_column(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_column: {params:?}");

        let column = self
            .kanban
            .delete_column(&params)
            .await
            .and_then(|c| c.ok_or(KanbanError::ColumnNotFound { id: params.id }))
            .map_err(|e| to_mcp_error("Failed to delete column", &e))?;

        text(DeleteResult::new(column))
    }

    pub async fn compact_column(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("compact_column: {params:?}");

        let tasks = self
            .kanban
            .compact_column(&params)
            .await
            .and_then(|t| t.ok_or(KanbanError::ColumnNotFound { id: params.id }))
            .map_err(|e| to_mcp_error("Failed to compact column", &e))?;

        text(OperationStatus::success(format!(
            "Renumbered {} tasks in column {}",
            tasks.len(),
            params.id
        )))
    }

    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    pub async fn create_task(&self, Parameters(params): Parameters<CreateTask>) -> McpResult {
        debug!("create_task: {params:?}");

        let task = self
            .kanban
            .create_task(&params)
            .await
            .and_then(|t| {
                t.ok_or(KanbanError::ColumnNotFound {
                    id: params.column_id,
                })
            })
            .map_err(|e| to_mcp_error("Failed to create task", &e))?;

        text(CreateResult::new(task))
    }

    pub async fn get_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("get_task: {params:?}");

        let task = self
            .kanban
            .get_task(&params)
            .await
            .and_then(|t| t.ok_or(KanbanError::TaskNotFound { id: params.id }))
            .map_err(|e| to_mcp_error("Failed to get task", &e))?;

        text(task)
    }

    pub async fn list_tasks(&self, Parameters(params): Parameters<ListTasks>) -> McpResult {
        debug!("list_tasks: {params:?}");

        let tasks = self
            .kanban
            .list_tasks_display(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to list tasks", &e))?;

        text(format!("# Tasks\n\n{tasks}"))
    }

    pub async fn update_task(&self, Parameters(params): Parameters<UpdateTask>) -> McpResult {
        debug!("update_task: {params:?}");

        let task = self
            .kanban
            .update_task(&params)
            .await
            .and_then(|t| t.ok_or(KanbanError::TaskNotFound { id: params.id }))
            .map_err(|e| to_mcp_error("Failed to update task", &e))?;

        let mut changes = Vec::new();
        if let Some(status) = &params.status {
            changes.push(format!("Status set to '{status}'"));
        }
        if let Some(priority) = &params.priority {
            changes.push(format!("Priority set to '{priority}'"));
        }
        if params.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if params.description.is_some() {
            changes.push("Updated description".to_string());
        }
        if params.owner.is_some() {
            changes.push("Updated owner".to_string());
        }
        if params.clear_description {
            changes.push("Removed description".to_string());
        }
        if params.clear_owner {
            changes.push("Removed owner".to_string());
        }

        text(UpdateResult::with_changes(task, changes))
    }

    pub async fn move_task(&self, Parameters(params): Parameters<MoveTask>) -> McpResult {
        debug!("move_task: {params:?}");

        let task = self
            .kanban
            .move_task(&params)
            .await
            .and_then(|t| t.ok_or(KanbanError::TaskNotFound { id: params.id }))
            .map_err(|e| to_mcp_error("Failed to move task", &e))?;

        let change = format!(
            "Moved to column {} at position {}",
            params.column_id, params.order
        );
        text(UpdateResult::with_changes(task, vec![change]))
    }

    pub async fn delete_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_task: {params:?}");

        let task = self
            .kanban
            .delete_task(&params)
            .await
            .and_then(|t| t.ok_or(KanbanError::TaskNotFound { id: params.id }))
            .map_err(|e| to_mcp_error("Failed to delete task", &e))?;

        text(DeleteResult::new(task))
    }
}
