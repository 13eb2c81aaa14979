//! Command handlers for the kanban CLI
//!
//! Every handler converts its clap arguments into core params, calls the
//! [`Kanban`] service and renders the core display types as markdown.

use anyhow::{anyhow, Result};
use kanban_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    params::{
        CreateColumn, CreateTask, DeleteBoard, Id, ListTasks, MoveColumn, MoveTask, UpdateBoard,
        UpdateColumn, UpdateTask,
    },
    Kanban,
};
use log::debug;

use crate::{
    args::{BoardCommands, ColumnCommands, TaskCommands},
    renderer::TerminalRenderer,
};

/// Runs parsed commands against one service handle.
pub struct Cli {
    kanban: Kanban,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(kanban: Kanban, renderer: TerminalRenderer) -> Self {
        Self { kanban, renderer }
    }

    pub async fn handle_board_command(&self, command: BoardCommands) -> Result<()> {
        match command {
            BoardCommands::Create(args) => {
                let board = self.kanban.create_board(&args.into()).await?;
                self.renderer.render(&CreateResult::new(board).to_string())
            }
            BoardCommands::List => self.list_boards().await,
            BoardCommands::Show(args) => {
                let params: Id = args.into();
                let board = self
                    .kanban
                    .get_board(&params)
                    .await?
                    .ok_or_else(|| not_found("Board", params.id))?;
                self.renderer.render(&board.to_string())
            }
            BoardCommands::Update(args) => {
                let params: UpdateBoard = args.into();
                let board = self
                    .kanban
                    .update_board(&params)
                    .await?
                    .ok_or_else(|| not_found("Board", params.id))?;
                self.renderer.render(&UpdateResult::new(board).to_string())
            }
            BoardCommands::Delete(args) => {
                let params: DeleteBoard = args.into();
                let board = self
                    .kanban
                    .delete_board(&params)
                    .await?
                    .ok_or_else(|| not_found("Board", params.id))?;
                self.renderer.render(&DeleteResult::new(board).to_string())
            }
        }
    }

    pub async fn handle_column_command(&self, command: ColumnCommands) -> Result<()> {
        match command {
            ColumnCommands::Add(args) => {
                let params: CreateColumn = args.into();
                let column = self
                    .kanban
                    .create_column(&params)
                    .await?
                    .ok_or_else(|| not_found("Board", params.board_id))?;
                self.renderer.render(&CreateResult::new(column).to_string())
            }
            ColumnCommands::List(args) => {
                let params: Id = args.into();
                let columns = self.kanban.list_columns_display(&params).await?;
                self.renderer
                    .render(&format!("# Columns on board {}\n\n{columns}", params.id))
            }
            ColumnCommands::Update(args) => {
                let params: UpdateColumn = args.into();
                let column = self
                    .kanban
                    .update_column(&params)
                    .await?
                    .ok_or_else(|| not_found("Column", params.id))?;
                self.renderer.render(&UpdateResult::new(column).to_string())
            }
            ColumnCommands::Move(args) => {
                let params: MoveColumn = args.into();
                let column = self
                    .kanban
                    .move_column(&params)
                    .await?
                    .ok_or_else(|| not_found("Column", params.id))?;
                let change = format!("Moved to position {}", params.order);
                self.renderer
                    .render(&UpdateResult::with_changes(column, vec![change]).to_string())
            }
            ColumnCommands::Delete(args) => {
                let params: Id = args.into();
                let column = self
                    .kanban
                    .delete_column(&params)
                    .await?
                    .ok_or_else(|| not_found("Column", params.id))?;
                self.renderer.render(&DeleteResult::new(column).to_string())
            }
            ColumnCommands::Compact(args) => {
                let params: Id = args.into();
                let tasks = self
                    .kanban
                    .compact_column(&params)
                    .await?
                    .ok_or_else(|| not_found("Column", params.id))?;
                let status = OperationStatus::success(format!(
                    "Renumbered {} tasks in column {}",
                    tasks.len(),
                    params.id
                ));
                self.renderer.render(&format!("{status}\n"))
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let params: CreateTask = args.into();
                let task = self
                    .kanban
                    .create_task(&params)
                    .await?
                    .ok_or_else(|| not_found("Column", params.column_id))?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::List(args) => {
                let params: ListTasks = args.into();
                debug!("Listing tasks with {params:?}");
                let tasks = self.kanban.list_tasks_display(&params).await?;
                self.renderer.render(&format!("# Tasks\n\n{tasks}"))
            }
            TaskCommands::Show(args) => {
                let params: Id = args.into();
                let task = self
                    .kanban
                    .get_task(&params)
                    .await?
                    .ok_or_else(|| not_found("Task", params.id))?;
                self.renderer.render(&task.to_string())
            }
            TaskCommands::Update(args) => {
                let params: UpdateTask = args.into();
                let task = self
                    .kanban
                    .update_task(&params)
                    .await?
                    .ok_or_else(|| not_found("Task", params.id))?;
                self.renderer.render(&UpdateResult::new(task).to_string())
            }
            TaskCommands::Move(args) => {
                let params: MoveTask = args.into();
                let task = self
                    .kanban
                    .move_task(&params)
                    .await?
                    .ok_or_else(|| not_found("Task", params.id))?;
                let change = format!(
                    "Moved to column {} at position {}",
                    params.column_id, params.order
                );
                self.renderer
                    .render(&UpdateResult::with_changes(task, vec![change]).to_string())
            }
            TaskCommands::Delete(args) => {
                let params: Id = args.into();
                let task = self
                    .kanban
                    .delete_task(&params)
                    .await?
                    .ok_or_else(|| not_found("Task", params.id))?;
                self.renderer.render(&DeleteResult::new(task).to_string())
            }
        }
    }

    /// Lists every board; also the default when no command is given.
    pub async fn list_boards(&self) -> Result<()> {
        let boards = self.kanban.list_boards_summary().await?;
        self.renderer.render(&format!("# Boards\n\n{boards}"))
    }
}

fn not_found(kind: &str, id: u64) -> anyhow::Error {
    anyhow!("{kind} with ID {id} not found")
}
