//! Async service handle for boards, columns and tasks.
//!
//! [`Kanban`] is what the CLI and the server talk to. Each method converts
//! its params into validated drafts or requests, then runs the matching
//! [`Database`] operation on a blocking worker with a fresh connection. The
//! schema is applied once, by [`KanbanBuilder::build`]:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (handlers)      │───▶│ (board_ops,     │───▶│   (via db/)     │
//! │                 │    │  column_ops,    │    │                 │
//! │                 │    │  task_ops)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Display wrappers       Param conversion       Transactions
//! ```
//!
//! Because every write runs in an IMMEDIATE transaction, any number of
//! `Kanban` handles (or processes) may share one database file.
//!
//! # Examples
//!
//! ```rust
//! use kanban_core::{
//!     params::{CreateBoard, CreateTask, Id},
//!     KanbanBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let kanban = KanbanBuilder::new()
//!     .with_database_path("/tmp/kanban-example.db")
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
//!         title: Some("Draft roadmap".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let columns = kanban.list_columns(&Id { id: board.id }).await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{KanbanError, Result},
};

pub mod board_ops;
pub mod builder;
pub mod column_ops;
pub mod handlers;
pub mod task_ops;


pub use builder::KanbanBuilder;

/// Main service interface for managing boards, columns and tasks.
#[derive(Debug, Clone)]
pub struct Kanban {
    pub(crate) db_path: PathBuf,
}

impl Kanban {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the database file this handle operates on.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Applies the schema and repairs the database file. Runs once, when the
    /// handle is built.
    pub(crate) async fn initialize(&self) -> Result<()> {
        let db_path = self.db_path.clone();
        Self::spawn(move || Database::new(&db_path).map(drop)).await
    }

    /// Runs `op` against a fresh connection on the blocking thread pool.
    pub(crate) async fn run_blocking<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        Self::spawn(move || {
            let mut db = Database::open(&db_path)?;
            op(&mut db)
        })
        .await
    }

    async fn spawn<T, F>(f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        task::spawn_blocking(f)
            .await
            .map_err(|e| KanbanError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }
}
