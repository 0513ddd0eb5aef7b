//! Embeddable MCP trait for in-process execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! stdio transport in between. The error enum mirrors the protocol-level
//! failures a server can raise; failures *inside* a tool (for example a
//! wrapped CLI exiting non-zero) still come back as `Ok` replies flagged
//! with `is_error`.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use github_pr_mcp::GitHubPrMcpServer;
//!
//! let server = GitHubPrMcpServer::new();
//! let tools = server.list_tools();
//! let result = server
//!     .call_tool("view_pr", serde_json::json!({ "number": 42 }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// Tool was not found in the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Invalid parameters passed to the tool
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// MCP protocol error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Trait for MCP servers that can be executed in-process
///
/// Implementations must be `Send + Sync` so a host can share one server
/// across tasks.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Server name, matching the name used in MCP configuration files
    fn server_name(&self) -> &str;

    /// All available tools with their input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Execute a tool by name with a JSON object of arguments
    ///
    /// Returns `Err` only for protocol-level failures (unknown tool, invalid
    /// parameters). A tool that ran and failed returns `Ok` with
    /// `is_error = Some(true)`.
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    /// Optional human-readable description of the server
    fn server_description(&self) -> Option<&str> {
        None
    }

    /// Server version, if available
    fn server_version(&self) -> Option<&str> {
        None
    }
}
