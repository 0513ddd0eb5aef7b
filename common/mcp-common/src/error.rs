//! Protocol error constructors for MCP servers
//!
//! Tools report protocol-level failures through `rmcp::ErrorData`. These
//! helpers keep the JSON-RPC codes consistent across servers.

use rmcp::model::ErrorCode;
use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Create an invalid params error with a message
///
/// Use this when the tool receives arguments that do not match its schema.
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::invalid_params;
///
/// if number == 0 {
///     return Err(invalid_params("Invalid parameters for view_pr: number must be a positive integer"));
/// }
/// ```
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

/// Create a method-not-found error for a tool name the server does not expose
pub fn method_not_found(message: impl Into<String>) -> McpError {
    McpError::new(ErrorCode::METHOD_NOT_FOUND, message.into(), None)
}
