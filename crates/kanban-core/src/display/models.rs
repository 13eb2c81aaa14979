//! Display implementations for domain models.
//!
//! Models format as markdown. A board renders its columns as second-level
//! sections and each column renders its tasks beneath it, so the same
//! implementations serve both standalone and nested output.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Board, BoardSummary, Column, Task, TaskPriority, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        if let Some(owner) = &self.owner_id {
            writeln!(f, "- Owner: {owner}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.columns.is_empty() {
            writeln!(f, "\nNo columns on this board.")?;
        } else {
            for column in &self.columns {
                writeln!(f)?;
                write!(f, "{column}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {} (ID: {})", self.order, self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Board: {}", self.board_id)?;
        writeln!(f, "- Color: {}", self.color)?;

        for task in &self.tasks {
            writeln!(f)?;
            write!(f, "{task}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- Position: {} in column {} (board {})",
            self.order, self.column_id, self.board_id
        )?;
        writeln!(f, "- Priority: {}", self.priority)?;
        if let Some(owner) = &self.owner {
            writeln!(f, "- Owner: {owner}")?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for BoardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.task_count > 0 {
            format!(" ({}/{})", self.done_count, self.task_count)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        if let Some(owner) = &self.owner_id {
            writeln!(f, "- **Owner**: {owner}")?;
        }
        writeln!(f, "- **Columns**: {}", self.column_count)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}
