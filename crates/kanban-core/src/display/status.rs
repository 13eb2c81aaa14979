//! Status and confirmation message types for operation feedback.

use std::fmt;

/// A one-line outcome message for operations that have no resource to show,
/// such as a refused or cancelled deletion.
#[derive(Debug, Clone)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Board deleted");
        assert_eq!(success.to_string(), "Success: Board deleted\n");

        let failure = OperationStatus::failure("Deletion not confirmed");
        assert!(failure.to_string().starts_with("Error:"));
    }
}
