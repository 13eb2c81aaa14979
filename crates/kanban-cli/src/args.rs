//! Command-line argument definitions using clap
//!
//! Each subcommand has its own clap wrapper that converts into the matching
//! core parameter type, so the core params stay free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Kanban service
//! ```

use std::{fmt, path::PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use kanban_core::params::*;

/// Kanban board manager
///
/// Boards hold ordered columns and columns hold ordered tasks. Every change
/// keeps positions dense and every task on its column's board. The same
/// operations are available to AI assistants through the MCP server mode.
#[derive(Parser)]
#[command(version, about, name = "kb")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/kanban/kanban.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the kanban CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage boards
    #[command(alias = "b")]
    Board {
        #[command(subcommand)]
        command: BoardCommands,
    },
    /// Manage columns on a board
    #[command(alias = "c")]
    Column {
        #[command(subcommand)]
        command: ColumnCommands,
    },
    /// Manage tasks within columns
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Start the MCP server
    Serve,
}

// ============================================================================
// Boards
// ============================================================================

/// Create a new board with "To Do", "In Progress" and "Done" columns
#[derive(ClapArgs)]
pub struct CreateBoardArgs {
    /// Title of the board
    pub title: Option<String>,
    #[arg(short, long, help = "Optional description of the board")]
    pub description: Option<String>,
    #[arg(short, long, help = "Owner of the board")]
    pub owner: Option<String>,
}

impl From<CreateBoardArgs> for CreateBoard {
    fn from(val: CreateBoardArgs) -> Self {
        CreateBoard {
            title: val.title,
            description: val.description,
            owner_id: val.owner,
        }
    }
}

/// Identify a single board or task
#[derive(ClapArgs)]
pub struct ShowArgs {
    #[arg(help = "Unique identifier of the item")]
    pub id: u64,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a board's title, description or owner
#[derive(ClapArgs)]
pub struct UpdateBoardArgs {
    #[arg(help = "Unique identifier of the board to update")]
    pub id: u64,
    #[arg(short, long, help = "New title for the board")]
    pub title: Option<String>,
    #[arg(short, long, help = "New description for the board")]
    pub description: Option<String>,
    #[arg(short, long, help = "New owner for the board")]
    pub owner: Option<String>,
    #[arg(long, conflicts_with = "description", help = "Remove the description")]
    pub clear_description: bool,
    #[arg(long, conflicts_with = "owner", help = "Remove the owner")]
    pub clear_owner: bool,
}

impl From<UpdateBoardArgs> for UpdateBoard {
    fn from(val: UpdateBoardArgs) -> Self {
        UpdateBoard {
            id: val.id,
            title: val.title,
            description: val.description,
            owner_id: val.owner,
            clear_description: val.clear_description,
            clear_owner_id: val.clear_owner,
        }
    }
}

/// Delete a board permanently, with all its columns and tasks
#[derive(ClapArgs)]
pub struct DeleteBoardArgs {
    #[arg(help = "Unique identifier of the board to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteBoardArgs> for DeleteBoard {
    fn from(val: DeleteBoardArgs) -> Self {
        DeleteBoard {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum BoardCommands {
    /// Create a new board
    #[command(alias = "c")]
    Create(CreateBoardArgs),
    /// List all boards
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a board with its columns and tasks
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Update a board's details
    #[command(alias = "u")]
    Update(UpdateBoardArgs),
    /// Delete a board permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteBoardArgs),
}

// ============================================================================
// Columns
// ============================================================================

/// Add a column to a board
///
/// Without --order the column is appended. With --order the columns at and
/// after that 0-based position shift right.
#[derive(ClapArgs)]
pub struct AddColumnArgs {
    #[arg(help = "Unique identifier of the board to add the column to")]
    pub board_id: u64,
    /// Title of the column
    pub title: Option<String>,
    #[arg(long, help = "0-based position of the column on the board")]
    pub order: Option<u32>,
    #[arg(short, long, help = "Hex color such as #4ECDC4")]
    pub color: Option<String>,
}

impl From<AddColumnArgs> for CreateColumn {
    fn from(val: AddColumnArgs) -> Self {
        CreateColumn {
            board_id: val.board_id,
            title: val.title,
            order: val.order,
            color: val.color,
        }
    }
}

/// List a board's columns in order
#[derive(ClapArgs)]
pub struct ListColumnsArgs {
    #[arg(help = "Unique identifier of the board")]
    pub board_id: u64,
}

impl From<ListColumnsArgs> for Id {
    fn from(val: ListColumnsArgs) -> Self {
        Id { id: val.board_id }
    }
}

/// Rename or recolor a column
#[derive(ClapArgs)]
pub struct UpdateColumnArgs {
    #[arg(help = "Unique identifier of the column to update")]
    pub id: u64,
    #[arg(short, long, help = "New title for the column")]
    pub title: Option<String>,
    #[arg(short, long, help = "New hex color for the column")]
    pub color: Option<String>,
}

impl From<UpdateColumnArgs> for UpdateColumn {
    fn from(val: UpdateColumnArgs) -> Self {
        UpdateColumn {
            id: val.id,
            title: val.title,
            color: val.color,
        }
    }
}

/// Move a column to another position on its board
#[derive(ClapArgs)]
pub struct MoveColumnArgs {
    #[arg(help = "Unique identifier of the column to move")]
    pub id: u64,
    #[arg(help = "0-based target position on the board")]
    pub order: u32,
}

impl From<MoveColumnArgs> for MoveColumn {
    fn from(val: MoveColumnArgs) -> Self {
        MoveColumn {
            id: val.id,
            order: val.order,
        }
    }
}

/// Delete a column and its tasks, or renumber its tasks
#[derive(ClapArgs)]
pub struct ColumnIdArgs {
    #[arg(help = "Unique identifier of the column")]
    pub id: u64,
}

impl From<ColumnIdArgs> for Id {
    fn from(val: ColumnIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ColumnCommands {
    /// Add a column to a board
    #[command(alias = "a")]
    Add(AddColumnArgs),
    /// List a board's columns
    #[command(aliases = ["l", "ls"])]
    List(ListColumnsArgs),
    /// Rename or recolor a column
    #[command(alias = "u")]
    Update(UpdateColumnArgs),
    /// Move a column to another position
    #[command(alias = "m")]
    Move(MoveColumnArgs),
    /// Delete a column and its tasks
    #[command(aliases = ["d", "rm"])]
    Delete(ColumnIdArgs),
    /// Renumber a column's tasks to 1..n
    Compact(ColumnIdArgs),
}

// ============================================================================
// Tasks
// ============================================================================

/// Add a task to a column
///
/// Without --order the task is appended. With --order the tasks at and after
/// that 1-based position shift down.
#[derive(ClapArgs)]
pub struct AddTaskArgs {
    #[arg(help = "Unique identifier of the column to add the task to")]
    pub column_id: u64,
    /// Title of the task
    pub title: Option<String>,
    #[arg(short, long, help = "Optional detailed description of the task")]
    pub description: Option<String>,
    #[arg(short, long, help = "Initial status of the task")]
    pub status: Option<TaskStatusArg>,
    #[arg(short, long, help = "Priority of the task")]
    pub priority: Option<TaskPriorityArg>,
    #[arg(long, help = "1-based position of the task in the column")]
    pub order: Option<u32>,
    #[arg(short, long, help = "Person the task is assigned to")]
    pub owner: Option<String>,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            column_id: val.column_id,
            board_id: None,
            title: val.title,
            description: val.description,
            status: val.status.map(|s| s.to_string()),
            priority: val.priority.map(|p| p.to_string()),
            order: val.order,
            owner: val.owner,
        }
    }
}

/// List tasks, optionally filtered
#[derive(ClapArgs)]
pub struct ListTasksArgs {
    #[arg(short, long, help = "Only tasks on this board")]
    pub board: Option<u64>,
    #[arg(short, long, help = "Only tasks in this column")]
    pub column: Option<u64>,
    #[arg(short, long, help = "Only tasks with this status")]
    pub status: Option<TaskStatusArg>,
    #[arg(short, long, help = "Only tasks with this priority")]
    pub priority: Option<TaskPriorityArg>,
    #[arg(short, long, help = "Only tasks assigned to this owner")]
    pub owner: Option<String>,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            board_id: val.board,
            column_id: val.column,
            status: val.status.map(|s| s.to_string()),
            priority: val.priority.map(|p| p.to_string()),
            owner: val.owner,
        }
    }
}

/// Update a task's details without moving it
#[derive(ClapArgs)]
pub struct UpdateTaskArgs {
    #[arg(help = "Unique identifier of the task to update")]
    pub id: u64,
    #[arg(short, long, help = "New title for the task")]
    pub title: Option<String>,
    #[arg(short, long, help = "New description for the task")]
    pub description: Option<String>,
    #[arg(short, long, help = "New status for the task")]
    pub status: Option<TaskStatusArg>,
    #[arg(short, long, help = "New priority for the task")]
    pub priority: Option<TaskPriorityArg>,
    #[arg(short, long, help = "New owner for the task")]
    pub owner: Option<String>,
    #[arg(long, conflicts_with = "description", help = "Remove the description")]
    pub clear_description: bool,
    #[arg(long, conflicts_with = "owner", help = "Unassign the task")]
    pub clear_owner: bool,
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        UpdateTask {
            id: val.id,
            title: val.title,
            description: val.description,
            status: val.status.map(|s| s.to_string()),
            priority: val.priority.map(|p| p.to_string()),
            owner: val.owner,
            clear_description: val.clear_description,
            clear_owner: val.clear_owner,
        }
    }
}

/// Move a task to a position in a column, on any board
#[derive(ClapArgs)]
pub struct MoveTaskArgs {
    #[arg(help = "Unique identifier of the task to move")]
    pub id: u64,
    #[arg(help = "Unique identifier of the target column")]
    pub column_id: u64,
    #[arg(help = "1-based target position in the column")]
    pub order: u32,
}

impl From<MoveTaskArgs> for MoveTask {
    fn from(val: MoveTaskArgs) -> Self {
        MoveTask {
            id: val.id,
            column_id: val.column_id,
            order: val.order,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task to a column
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List tasks
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show a task
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Update a task's details
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Move a task to a column and position
    #[command(alias = "m")]
    Move(MoveTaskArgs),
    /// Delete a task
    #[command(aliases = ["d", "rm"])]
    Delete(ShowArgs),
}

/// Command-line representation of task status values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum TaskStatusArg {
    /// Not started
    Todo,
    /// Being worked on
    InProgress,
    /// Completed
    Done,
}

impl fmt::Display for TaskStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatusArg::Todo => write!(f, "todo"),
            TaskStatusArg::InProgress => write!(f, "in_progress"),
            TaskStatusArg::Done => write!(f, "done"),
        }
    }
}

/// Command-line representation of task priority values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum TaskPriorityArg {
    Low,
    Medium,
    High,
    Urgent,
}

impl fmt::Display for TaskPriorityArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TaskPriorityArg::Low => "low",
            TaskPriorityArg::Medium => "medium",
            TaskPriorityArg::High => "high",
            TaskPriorityArg::Urgent => "urgent",
        };
        f.write_str(value)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_status_args_match_core_values() {
        use kanban_core::TaskStatus;

        for (arg, status) in [
            (TaskStatusArg::Todo, TaskStatus::Todo),
            (TaskStatusArg::InProgress, TaskStatus::InProgress),
            (TaskStatusArg::Done, TaskStatus::Done),
        ] {
            assert_eq!(arg.to_string(), status.as_str());
        }
    }

    #[test]
    fn test_add_task_args_conversion() {
        let args = Args::parse_from([
            "kb", "task", "add", "3", "Write docs", "--priority", "high", "--order", "2",
        ]);
        let Some(Commands::Task {
            command: TaskCommands::Add(add),
        }) = args.command
        else {
            panic!("Expected task add command");
        };

        let params = CreateTask::from(add);
        assert_eq!(params.column_id, 3);
        assert_eq!(params.title.as_deref(), Some("Write docs"));
        assert_eq!(params.priority.as_deref(), Some("high"));
        assert_eq!(params.order, Some(2));
        assert!(params.status.is_none());
    }

    #[test]
    fn test_update_task_clear_owner() {
        let args = Args::parse_from(["kb", "task", "update", "5", "--clear-owner"]);
        let Some(Commands::Task {
            command: TaskCommands::Update(update),
        }) = args.command
        else {
            panic!("Expected task update command");
        };

        let params = UpdateTask::from(update);
        assert!(params.clear_owner);
        assert!(params.owner.is_none());

        let conflict =
            Args::try_parse_from(["kb", "task", "update", "5", "--owner", "kim", "--clear-owner"]);
        assert!(conflict.is_err());
    }
}
