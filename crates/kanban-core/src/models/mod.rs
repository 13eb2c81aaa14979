//! Data models for boards, columns and tasks.
//!
//! A [`Board`] owns an ordered list of [`Column`]s and each column owns an
//! ordered list of [`Task`]s. Column positions are dense from 0 within a
//! board; task positions are dense from 1 within a column. Every task also
//! carries a copy of its column's board ID.
//!
//! Records that do not exist yet are described by drafts ([`BoardDraft`],
//! [`ColumnDraft`], [`TaskDraft`]) which have every default applied. Display
//! implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use kanban_core::models::{Board, BoardSummary, Column};
//!
//! let column = Column {
//!     id: 1,
//!     board_id: 1,
//!     title: "To Do".to_string(),
//!     order: 0,
//!     color: "#4ECDC4".to_string(),
//! #   created_at: Timestamp::now(),
//! #   updated_at: Timestamp::now(),
//!     tasks: vec![],
//! };
//! let board = Board {
//!     id: 1,
//!     title: "Sprint 1".to_string(),
//! #   description: None,
//! #   owner_id: None,
//! #   created_at: Timestamp::now(),
//! #   updated_at: Timestamp::now(),
//!     columns: vec![column],
//! };
//!
//! let summary = BoardSummary::from(&board);
//! assert_eq!(summary.column_count, 1);
//! assert!(board.column_titled("To Do").is_some());
//! ```

pub mod board;
pub mod column;
pub mod filters;
pub mod requests;
pub mod status;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use column::Column;
pub use filters::TaskFilter;
pub use requests::{
    BoardDraft, ColumnDraft, TaskDraft, UpdateBoardRequest, UpdateColumnRequest,
    UpdateTaskRequest, DEFAULT_BOARD_TITLE, DEFAULT_COLUMN_COLOR, DEFAULT_COLUMN_TITLE,
    DEFAULT_TASK_TITLE, MAX_ORDER, SEED_COLUMNS,
};
pub use status::{TaskPriority, TaskStatus};
pub use summary::BoardSummary;
pub use task::Task;
