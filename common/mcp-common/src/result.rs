//! Reply envelope helpers for MCP tool responses
//!
//! Every tool reply in this workspace is a single text block. Successful
//! replies carry no error flag; failed command executions are still ordinary
//! replies, only flagged with `is_error`.

use rmcp::model::{CallToolResult, Content};

/// Create a successful plain text reply
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::text_success;
///
/// Ok(text_success(stdout))
/// ```
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Create a flagged (`is_error = true`) plain text reply
///
/// Used when the tool ran but the work it delegated failed, so the caller
/// sees the failure as data rather than as a protocol error.
pub fn text_error(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}

/// First text block of a reply, if any
pub fn reply_text(result: &CallToolResult) -> Option<&str> {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
}
