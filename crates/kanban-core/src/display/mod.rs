//! Markdown formatting shared by the CLI and the server.
//!
//! Domain models implement `Display` directly (see [`models`]). Collections
//! and operation outcomes are formatted through newtype wrappers so every
//! front end produces the same text:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │   Collections   │    │   Formatted     │
//! │ (Board, Task..) │───▶│  & Result Types │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: `BoardSummaries`, `Columns`, `Tasks`
//! - [`results`]: `CreateResult`, `UpdateResult`, `DeleteResult`
//! - [`status`]: `OperationStatus`
//! - [`datetime`]: `LocalDateTime`
//!
//! ```rust
//! use jiff::Timestamp;
//! use kanban_core::{
//!     display::{OperationStatus, UpdateResult},
//!     models::{Task, TaskPriority, TaskStatus},
//! };
//!
//! let task = Task {
//!     id: 3,
//!     board_id: 1,
//!     column_id: 2,
//!     title: "Draft roadmap".to_string(),
//!     description: None,
//!     status: TaskStatus::Todo,
//!     priority: TaskPriority::High,
//!     order: 1,
//!     owner: None,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//! };
//!
//! let moved = UpdateResult::with_changes(task, vec!["Moved to column 2".to_string()]);
//! assert!(moved.to_string().contains("Changes made:"));
//!
//! let refused = OperationStatus::failure("Deletion not confirmed");
//! assert!(refused.to_string().starts_with("Error:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{BoardSummaries, Columns, Tasks};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, Resource, UpdateResult};
pub use status::OperationStatus;
