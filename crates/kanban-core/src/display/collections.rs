//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its items with their own `Display` implementation and
//! prints a fixed message when empty, leaving any heading to the caller.

use std::{fmt, ops::Index};

use crate::models::{BoardSummary, Column, Task};

macro_rules! collection_wrapper {
    ($(#[$meta:meta])* $name:ident, $item:ty, $empty:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name(pub Vec<$item>);

        impl $name {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Get the number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Get a reference to the item at the given index.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            /// Get an iterator over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    return writeln!(f, $empty);
                }
                for (i, item) in self.0.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    };
}

collection_wrapper!(
    /// Board summaries as shown by `list_boards`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::Timestamp;
    /// use kanban_core::{display::BoardSummaries, models::BoardSummary};
    ///
    /// let summary = BoardSummary {
    ///     id: 1,
    ///     title: "Sprint 1".to_string(),
    ///     description: None,
    ///     owner_id: None,
    ///     created_at: Timestamp::now(),
    ///     updated_at: Timestamp::now(),
    ///     column_count: 3,
    ///     task_count: 0,
    ///     done_count: 0,
    /// };
    ///
    /// let output = BoardSummaries(vec![summary]).to_string();
    /// assert!(output.contains("## Sprint 1 (ID: 1)"));
    /// ```
    BoardSummaries,
    BoardSummary,
    "No boards found."
);

collection_wrapper!(
    /// Columns of a board in display order.
    Columns,
    Column,
    "No columns found."
);

collection_wrapper!(
    /// Tasks from a listing, in the order the store returned them.
    Tasks,
    Task,
    "No tasks found."
);

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{TaskPriority, TaskStatus};

    fn create_test_task(id: u64, status: TaskStatus) -> Task {
        Task {
            id,
            board_id: 1,
            column_id: 2,
            title: format!("Task {id}"),
            description: None,
            status,
            priority: TaskPriority::Medium,
            order: id as u32,
            owner: None,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(BoardSummaries(vec![]).to_string(), "No boards found.\n");
        assert_eq!(Columns(vec![]).to_string(), "No columns found.\n");
        assert_eq!(Tasks(vec![]).to_string(), "No tasks found.\n");
    }

    #[test]
    fn test_tasks_display_multiple() {
        let tasks = Tasks(vec![
            create_test_task(1, TaskStatus::Todo),
            create_test_task(2, TaskStatus::Done),
        ]);
        let output = tasks.to_string();

        assert!(output.contains("### 1. Task 1 (○ Todo)"));
        assert!(output.contains("### 2. Task 2 (✓ Done)"));
        assert!(!output.starts_with("# "));
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, 2);
    }

    #[test]
    fn test_columns_iterates_in_order() {
        let column = |id: u64, order: u32| Column {
            id,
            board_id: 1,
            title: format!("Column {id}"),
            order,
            color: "#4ECDC4".to_string(),
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
            tasks: vec![],
        };
        let columns = Columns::from(vec![column(7, 0), column(3, 1)]);

        let ids: Vec<u64> = columns.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![7, 3]);
        assert!(columns.to_string().contains("## 1. Column 3 (ID: 3)"));
    }
}
