//! MCP server implementation for the kanban board
//!
//! Exposes every board, column and task operation as an MCP tool over
//! stdio, so AI assistants can manage boards with the same ordering and
//! consistency rules as the CLI.

use anyhow::Result;
use kanban_core::{
    params::{
        CreateBoard, CreateColumn, CreateTask, DeleteBoard, Id, ListTasks, MoveColumn, MoveTask,
        UpdateBoard, UpdateColumn, UpdateTask,
    },
    Kanban,
};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{McpHandlers, McpResult};

/// MCP server for kanban boards
#[derive(Clone)]
pub struct KanbanMcpServer {
    kanban: Kanban,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl KanbanMcpServer {
    pub fn new(kanban: Kanban) -> Self {
        Self {
            kanban,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.kanban.clone())
    }

    #[tool(
        name = "create_board",
        description = "Create a new kanban board. It starts with three columns: 'To Do' (order 0), 'In Progress' (order 1) and 'Done' (order 2). Title defaults to 'Untitled Board'. Returns the board with its column IDs."
    )]
    async fn create_board(&self, params: Parameters<CreateBoard>) -> McpResult {
        self.handlers().create_board(params).await
    }

    #[tool(
        name = "list_boards",
        description = "List all boards, oldest first, with their column count, task count and how many tasks are done."
    )]
    async fn list_boards(&self) -> McpResult {
        self.handlers().list_boards().await
    }

    #[tool(
        name = "get_board",
        description = "Show a board with all its columns in order and every task in each column."
    )]
    async fn get_board(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().get_board(params).await
    }

    #[tool(
        name = "update_board",
        description = "Change a board's title, description or owner. Omitted fields are left unchanged. Set clear_description or clear_owner_id to remove a value."
    )]
    async fn update_board(&self, params: Parameters<UpdateBoard>) -> McpResult {
        self.handlers().update_board(params).await
    }

    #[tool(
        name = "delete_board",
        description = "Permanently delete a board together with all of its columns and tasks. Requires confirmed=true. This cannot be undone."
    )]
    async fn delete_board(&self, params: Parameters<DeleteBoard>) -> McpResult {
        self.handlers().delete_board(params).await
    }

    #[tool(
        name = "create_column",
        description = "Add a column to a board. Without 'order' it is appended. With a 0-based 'order' the columns at and after that position shift right. Color is a hex value like #4ECDC4."
    )]
    async fn create_column(&self, params: Parameters<CreateColumn>) -> McpResult {
        self.handlers().create_column(params).await
    }

    #[tool(
        name = "list_columns",
        description = "List a board's columns in order. Takes the board ID."
    )]
    async fn list_columns(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().list_columns(params).await
    }

    #[tool(
        name = "update_column",
        description = "Rename or recolor a column. Use move_column to change its position."
    )]
    async fn update_column(&self, params: Parameters<UpdateColumn>) -> McpResult {
        self.handlers().update_column(params).await
    }

    #[tool(
        name = "move_column",
        description = "Move a column to a 0-based position on its board. The other columns are renumbered so positions stay 0..n-1."
    )]
    async fn move_column(&self, params: Parameters<MoveColumn>) -> McpResult {
        self.handlers().move_column(params).await
    }

    #[tool(
        name = "delete_column",
        description = "Delete a column and every task in it. Later columns move up one position."
    )]
    async fn delete_column(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_column(params).await
    }

    #[tool(
        name = "compact_column",
        description = "Renumber a column's tasks to 1..n, keeping their current order. Use after explicit positions have left gaps."
    )]
    async fn compact_column(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().compact_column(params).await
    }

    #[tool(
        name = "create_task",
        description = "Add a task to a column. The task's board always comes from the column; a board_id that does not match is rejected. Without 'order' the task is appended; with a 1-based 'order' later tasks shift down. Status is todo, in_progress or done (default todo). Priority is low, medium, high or urgent (default medium)."
    )]
    async fn create_task(&self, params: Parameters<CreateTask>) -> McpResult {
        self.handlers().create_task(params).await
    }

    #[tool(
        name = "get_task",
        description = "Show a single task with its column, board, position, status, priority and owner."
    )]
    async fn get_task(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().get_task(params).await
    }

    #[tool(
        name = "list_tasks",
        description = "List tasks in board, column and position order. Optionally filter by board_id, column_id, status, priority or owner."
    )]
    async fn list_tasks(&self, params: Parameters<ListTasks>) -> McpResult {
        self.handlers().list_tasks(params).await
    }

    #[tool(
        name = "update_task",
        description = "Change a task's title, description, status, priority or owner without moving it. Status does not move the task between columns. Set clear_owner to unassign the task or clear_description to remove its description."
    )]
    async fn update_task(&self, params: Parameters<UpdateTask>) -> McpResult {
        self.handlers().update_task(params).await
    }

    #[tool(
        name = "move_task",
        description = "Move a task to a 1-based position in a column, possibly on another board. The source column closes the gap, the target column makes room, and the task's board follows the target column."
    )]
    async fn move_task(&self, params: Parameters<MoveTask>) -> McpResult {
        self.handlers().move_task(params).await
    }

    #[tool(
        name = "delete_task",
        description = "Delete a task. Later tasks in its column move up one position."
    )]
    async fn delete_task(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_task(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for KanbanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "kanban".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Kanban boards with ordered columns and ordered tasks.

## Core Concepts
- **Boards** hold columns. New boards start with 'To Do', 'In Progress' and 'Done'.
- **Columns** are numbered 0..n-1 on their board.
- **Tasks** are numbered 1..n in their column and always belong to their column's board.

## Workflow
1. `create_board`, then `get_board` to learn the column IDs
2. `create_task` in a column; `move_task` to change column or position
3. `update_task` for status, priority and owner changes
4. `delete_column` and `delete_board` remove everything beneath them"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: KanbanMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting kanban MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
