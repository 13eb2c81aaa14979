//! Error types for the kanban library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all board, column and task operations.
#[derive(Error, Debug)]
pub enum KanbanError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Board not found for the given ID
    #[error("Board with ID {id} not found")]
    BoardNotFound { id: u64 },
    /// Column not found for the given ID
    #[error("Column with ID {id} not found")]
    ColumnNotFound { id: u64 },
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },
    /// A supplied parent identifier does not resolve to a usable record
    #[error("Invalid reference in '{field}': {id} does not exist or does not match")]
    InvalidReference { field: String, id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A structural invariant would be broken by the operation
    #[error("Integrity violation: {message}")]
    Integrity { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> KanbanError {
        KanbanError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> KanbanError {
        KanbanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl KanbanError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invalid reference error for the given field.
    pub fn invalid_reference(field: impl Into<String>, id: u64) -> Self {
        Self::InvalidReference {
            field: field.into(),
            id,
        }
    }

    /// Whether the error means the addressed record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BoardNotFound { .. } | Self::ColumnNotFound { .. } | Self::TaskNotFound { .. }
        )
    }

    /// Whether the error was caused by caller-supplied input rather than the
    /// store.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::InvalidReference { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| KanbanError::database(message).with_source(e))
    }
}

/// Result type alias for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(KanbanError::BoardNotFound { id: 1 }.is_not_found());
        assert!(KanbanError::TaskNotFound { id: 1 }.is_not_found());
        assert!(!KanbanError::invalid_reference("column_id", 3).is_not_found());
    }

    #[test]
    fn test_caller_error_classification() {
        let err = KanbanError::invalid_input("title").with_reason("Title cannot be empty");
        assert!(err.is_caller_error());
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'title': Title cannot be empty"
        );
        assert!(KanbanError::invalid_reference("board_id", 9).is_caller_error());
        assert!(!KanbanError::Integrity {
            message: "broken".to_string()
        }
        .is_caller_error());
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to query board").unwrap_err();
        match err {
            KanbanError::Database { message, .. } => assert_eq!(message, "Failed to query board"),
            other => panic!("Expected Database error, got {other:?}"),
        }
    }
}
