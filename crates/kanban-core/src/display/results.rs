//! Result wrapper types for displaying operation outcomes.
//!
//! Create, update and delete results share one message format across boards,
//! columns and tasks; the resource kind and identity come from
//! [`Resource`].

use std::fmt;

use crate::models::{Board, Column, Task};

/// Identity of a displayable resource.
pub trait Resource: fmt::Display {
    /// Lowercase resource kind used in messages
    const KIND: &'static str;

    fn id(&self) -> u64;

    fn title(&self) -> &str;
}

impl Resource for Board {
    const KIND: &'static str = "board";

    fn id(&self) -> u64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Resource for Column {
    const KIND: &'static str = "column";

    fn id(&self) -> u64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Resource for Task {
    const KIND: &'static str = "task";

    fn id(&self) -> u64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use kanban_core::{display::CreateResult, models::Board};
///
/// let board = Board {
///     id: 1,
///     title: "Sprint 1".to_string(),
///     description: None,
///     owner_id: None,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     columns: vec![],
/// };
///
/// let output = CreateResult::new(board).to_string();
/// assert!(output.starts_with("Created board with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update and move operations,
/// optionally listing the changes that were applied.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Resource> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            T::KIND,
            self.resource.title(),
            self.resource.id()
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{TaskPriority, TaskStatus};

    fn create_test_task() -> Task {
        Task {
            id: 5,
            board_id: 1,
            column_id: 2,
            title: "Draft roadmap".to_string(),
            description: None,
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            order: 1,
            owner: Some("sam".to_string()),
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_update_result_lists_changes() {
        let result = UpdateResult::with_changes(
            create_test_task(),
            vec!["Moved to column 2 at position 1".to_string()],
        );
        let output = result.to_string();

        assert!(output.starts_with("Updated task with ID: 5"));
        assert!(output.contains("Changes made:\n- Moved to column 2 at position 1"));
        assert!(output.contains("### 5. Draft roadmap (➤ In Progress)"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let output = UpdateResult::new(create_test_task()).to_string();
        assert!(!output.contains("Changes made:"));
    }

    #[test]
    fn test_delete_result_message() {
        let output = DeleteResult::new(create_test_task()).to_string();
        assert_eq!(output, "Deleted task 'Draft roadmap' (ID: 5)\n");
    }
}
