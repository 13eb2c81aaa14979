//! Draft and update request types.
//!
//! Drafts are fully-populated values for records that do not exist yet:
//! every default is applied when a draft is built from its params, so the
//! store never sees a missing title or status. Update requests carry only the
//! fields that change, already validated.

use std::str::FromStr;

use super::{TaskPriority, TaskStatus};
use crate::{params, KanbanError, Result};

/// Title given to boards created without one.
pub const DEFAULT_BOARD_TITLE: &str = "Untitled Board";

/// Title given to columns created without one.
pub const DEFAULT_COLUMN_TITLE: &str = "New Column";

/// Color given to columns created without one.
pub const DEFAULT_COLUMN_COLOR: &str = "#4ECDC4";

/// Title given to tasks created without one.
pub const DEFAULT_TASK_TITLE: &str = "New Task";

/// Columns every new board starts with, in order.
pub const SEED_COLUMNS: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Highest order a column or task may hold. Leaves headroom for shifting
/// siblings up by one without leaving the `u32` range.
pub const MAX_ORDER: u32 = i32::MAX as u32;

/// Returns the trimmed title, or `default` when it is missing or blank.
fn title_or(title: Option<String>, default: &str) -> String {
    title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Rejects titles that are blank after trimming.
fn required_title(title: Option<String>) -> Result<Option<String>> {
    match title {
        Some(t) if t.trim().is_empty() => {
            Err(KanbanError::invalid_input("title").with_reason("Title cannot be empty"))
        }
        Some(t) => Ok(Some(t.trim().to_string())),
        None => Ok(None),
    }
}

/// Accepts `#RGB` and `#RRGGBB` hex colors.
fn validated_color(color: Option<String>) -> Result<Option<String>> {
    let Some(color) = color else {
        return Ok(None);
    };
    let color = color.trim().to_string();
    let digits = color.strip_prefix('#').unwrap_or("");
    let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(Some(color))
    } else {
        Err(KanbanError::invalid_input("color")
            .with_reason(format!("'{color}' is not a hex color like #4ECDC4")))
    }
}

/// Turns a new value and a clear flag into a change for a nullable field.
/// `None` leaves the field alone and `Some(None)` clears it.
fn nullable_change(
    field: &str,
    value: Option<String>,
    clear: bool,
) -> Result<Option<Option<String>>> {
    match (value, clear) {
        (Some(_), true) => Err(KanbanError::invalid_input(field)
            .with_reason(format!("Cannot set and clear '{field}' in one update"))),
        (Some(value), false) => Ok(Some(Some(value))),
        (None, true) => Ok(Some(None)),
        (None, false) => Ok(None),
    }
}

fn parse_status(status: Option<&str>) -> Result<Option<TaskStatus>> {
    status
        .map(TaskStatus::from_str)
        .transpose()
        .map_err(|reason| KanbanError::invalid_input("status").with_reason(reason))
}

fn parse_priority(priority: Option<&str>) -> Result<Option<TaskPriority>> {
    priority
        .map(TaskPriority::from_str)
        .transpose()
        .map_err(|reason| KanbanError::invalid_input("priority").with_reason(reason))
}

/// A board ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardDraft {
    pub title: String,
    pub description: Option<String>,
    pub owner_id: Option<String>,
}

impl From<params::CreateBoard> for BoardDraft {
    fn from(params: params::CreateBoard) -> Self {
        Self {
            title: title_or(params.title, DEFAULT_BOARD_TITLE),
            description: params.description,
            owner_id: params.owner_id,
        }
    }
}

/// A column ready to be inserted into a board.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDraft {
    pub board_id: u64,
    pub title: String,
    /// Requested position, or `None` to append
    pub order: Option<u32>,
    pub color: String,
}

impl ColumnDraft {
    /// A seed column at a fixed position with the default color.
    pub fn seed(board_id: u64, title: &str, order: u32) -> Self {
        Self {
            board_id,
            title: title.to_string(),
            order: Some(order),
            color: DEFAULT_COLUMN_COLOR.to_string(),
        }
    }
}

impl TryFrom<params::CreateColumn> for ColumnDraft {
    type Error = KanbanError;

    /// # Errors
    ///
    /// * `KanbanError::InvalidInput` - When the color is not a hex color
    fn try_from(params: params::CreateColumn) -> Result<Self> {
        Ok(Self {
            board_id: params.board_id,
            title: title_or(params.title, DEFAULT_COLUMN_TITLE),
            order: params.order,
            color: validated_color(params.color)?
                .unwrap_or_else(|| DEFAULT_COLUMN_COLOR.to_string()),
        })
    }
}

/// A task ready to be inserted into a column.
///
/// The task's board is not part of the draft: it is always read from the
/// column at insert time. `expected_board_id` only guards against callers
/// that name a different board.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub column_id: u64,
    pub expected_board_id: Option<u64>,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Requested position, or `None` to append
    pub order: Option<u32>,
    pub owner: Option<String>,
}

impl TaskDraft {
    /// A default task appended to the given column.
    pub fn new(column_id: u64, title: impl Into<String>) -> Self {
        Self {
            column_id,
            expected_board_id: None,
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            order: None,
            owner: None,
        }
    }
}

impl TryFrom<params::CreateTask> for TaskDraft {
    type Error = KanbanError;

    /// Convert create parameters into a draft with defaults applied.
    ///
    /// # Errors
    ///
    /// * `KanbanError::InvalidInput` - When status or priority is not
    ///   recognized, or the order is 0 or above [`MAX_ORDER`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kanban_core::{
    ///     models::{TaskDraft, TaskPriority, TaskStatus},
    ///     params::CreateTask,
    /// };
    ///
    /// let params = CreateTask {
    ///     column_id: 3,
    ///     priority: Some("high".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// let draft = TaskDraft::try_from(params)?;
    /// assert_eq!(draft.title, "New Task");
    /// assert_eq!(draft.status, TaskStatus::Todo);
    /// assert_eq!(draft.priority, TaskPriority::High);
    /// # kanban_core::Result::<()>::Ok(())
    /// ```
    fn try_from(params: params::CreateTask) -> Result<Self> {
        if let Some(order) = params.order {
            if !(1..=MAX_ORDER).contains(&order) {
                return Err(KanbanError::invalid_input("order")
                    .with_reason(format!("Task order must be between 1 and {MAX_ORDER}")));
            }
        }

        Ok(Self {
            column_id: params.column_id,
            expected_board_id: params.board_id,
            title: title_or(params.title, DEFAULT_TASK_TITLE),
            description: params.description,
            status: parse_status(params.status.as_deref())?.unwrap_or_default(),
            priority: parse_priority(params.priority.as_deref())?.unwrap_or_default(),
            order: params.order,
            owner: params.owner,
        })
    }
}

/// Field changes for a board. `Some(None)` clears a nullable field.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateBoardRequest {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub owner_id: Option<Option<String>>,
}

impl UpdateBoardRequest {
    /// Whether the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.owner_id.is_none()
    }
}

impl TryFrom<params::UpdateBoard> for UpdateBoardRequest {
    type Error = KanbanError;

    fn try_from(params: params::UpdateBoard) -> Result<Self> {
        Ok(Self {
            title: required_title(params.title)?,
            description: nullable_change(
                "description",
                params.description,
                params.clear_description,
            )?,
            owner_id: nullable_change("owner_id", params.owner_id, params.clear_owner_id)?,
        })
    }
}

/// Field changes for a column. Position is changed with a move instead.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateColumnRequest {
    pub title: Option<String>,
    pub color: Option<String>,
}

impl UpdateColumnRequest {
    /// Whether the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.color.is_none()
    }
}

impl TryFrom<params::UpdateColumn> for UpdateColumnRequest {
    type Error = KanbanError;

    fn try_from(params: params::UpdateColumn) -> Result<Self> {
        Ok(Self {
            title: required_title(params.title)?,
            color: validated_color(params.color)?,
        })
    }
}

/// Field changes for a task. Placement is changed with a move instead.
/// `Some(None)` clears the description or owner.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub owner: Option<Option<String>>,
}

impl UpdateTaskRequest {
    /// Whether the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.owner.is_none()
    }
}

impl TryFrom<params::UpdateTask> for UpdateTaskRequest {
    type Error = KanbanError;

    /// Convert update parameters into a validated request.
    ///
    /// # Errors
    ///
    /// * `KanbanError::InvalidInput` - When the title is blank, status or
    ///   priority is not recognized, or a field is both set and cleared
    fn try_from(params: params::UpdateTask) -> Result<Self> {
        Ok(Self {
            title: required_title(params.title)?,
            description: nullable_change(
                "description",
                params.description,
                params.clear_description,
            )?,
            status: parse_status(params.status.as_deref())?,
            priority: parse_priority(params.priority.as_deref())?,
            owner: nullable_change("owner", params.owner, params.clear_owner)?,
        })
    }
}
