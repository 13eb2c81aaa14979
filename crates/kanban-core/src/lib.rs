//! Core library for the kanban board application.
//!
//! This crate owns the board, column and task data model together with the
//! ordering engine that keeps sibling positions dense and the referential
//! rules that keep every task on the board its column belongs to.
//!
//! # Ordering
//!
//! - **Columns** are numbered `0..n` within their board.
//! - **Tasks** are numbered `1..n` within their column. Explicit positions
//!   shift later siblings down, deletions close the gap.
//!
//! Every mutation runs in a single immediate SQLite transaction, so two
//! writers never observe the same next position.
//!
//! # Quick Start
//!
//! ```rust
//! use kanban_core::{
//!     params::{CreateBoard, CreateTask},
//!     KanbanBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let kanban = KanbanBuilder::new()
//!     .with_database_path("test.db")
//!     .build()
//!     .await?;
//!
//! let board = kanban
//!     .create_board(&CreateBoard {
//!         title: Some("Sprint 1".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let todo = board.column_titled("To Do").map(|c| c.id).unwrap_or_default();
//! let task = kanban
//!     .create_task(&CreateTask {
//!         column_id: todo,
//!         title: Some("Write the release notes".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! if let Some(task) = task {
//!     println!("{task}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod service;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    BoardSummaries, Columns, CreateResult, DeleteResult, LocalDateTime, OperationStatus, Tasks,
    UpdateResult,
};
pub use error::{KanbanError, Result};
pub use models::{Board, BoardSummary, Column, Task, TaskFilter, TaskPriority, TaskStatus};
pub use params::{
    CreateBoard, CreateColumn, CreateTask, DeleteBoard, Id, ListTasks, MoveColumn, MoveTask,
    UpdateBoard, UpdateColumn, UpdateTask,
};
pub use service::{Kanban, KanbanBuilder};
