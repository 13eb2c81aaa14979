//! Error handling utilities for MCP server

use kanban_core::KanbanError;
use rmcp::ErrorData;

/// Converts a service error into an MCP error, keeping caller mistakes apart
/// from store failures.
pub fn to_mcp_error(message: &str, error: &KanbanError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_not_found() {
        ErrorData::resource_not_found(text, None)
    } else if error.is_caller_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
