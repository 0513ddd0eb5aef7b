//! MCP Server implementation
//!
//! `GitHubPrMcpServer` is the tool dispatcher. Error contract:
//!
//! - unknown tool name → protocol error (`METHOD_NOT_FOUND`)
//! - arguments rejected by the tool's schema → protocol error (`INVALID_PARAMS`)
//! - gh ran and failed → ordinary reply flagged with `is_error`, so the
//!   calling agent sees gh's error text as data

use std::sync::Arc;

use mcp_common::{
    async_trait, invalid_params, method_not_found, text_error, text_success, EmbeddableError,
    EmbeddableMcp, EmbeddableResult, McpError, McpResult,
};
use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::{RequestContext, RoleServer},
    ServerHandler,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::gh::{CommandRunner, GhCli};
use crate::schema::ValidationError;
use crate::tools::{self, PrTool};

/// Protocol-level dispatch failures
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid parameters for {tool}: {reason}")]
    InvalidParams {
        tool: &'static str,
        reason: ValidationError,
    },
}

impl From<DispatchError> for McpError {
    fn from(e: DispatchError) -> Self {
        match e {
            DispatchError::UnknownTool(_) => method_not_found(e.to_string()),
            DispatchError::InvalidParams { .. } => invalid_params(e.to_string()),
        }
    }
}

/// The GitHub pull request MCP server
#[derive(Clone)]
pub struct GitHubPrMcpServer {
    runner: Arc<dyn CommandRunner>,
}

impl GitHubPrMcpServer {
    /// Server backed by `gh` from PATH with default settings
    pub fn new() -> Self {
        Self::with_runner(GhCli::new("gh"))
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_runner(GhCli::from_config(&config.gh))
    }

    /// Server backed by any command runner (e.g. a simulated gh in tests)
    pub fn with_runner(runner: impl CommandRunner + 'static) -> Self {
        Self {
            runner: Arc::new(runner),
        }
    }

    /// Published tool definitions
    pub fn tools(&self) -> Vec<Tool> {
        tools::catalogue()
    }

    /// Look up, validate, build, execute
    ///
    /// `Value::Null` arguments are treated as an empty object, matching a
    /// `tools/call` request that omits `arguments`.
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<CallToolResult, DispatchError> {
        let tool =
            PrTool::from_name(name).ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;

        let args = if args.is_null() {
            Value::Object(Default::default())
        } else {
            args
        };
        let command = tool
            .build(&args)
            .map_err(|reason| DispatchError::InvalidParams {
                tool: tool.name(),
                reason,
            })?;

        info!(tool = tool.name(), cmd = %command, "running tool");

        match self.runner.run(&command).await {
            Ok(stdout) => Ok(text_success(stdout)),
            Err(e) => {
                warn!(tool = tool.name(), error = %e, "gh command failed");
                Ok(text_error(e.to_string()))
            }
        }
    }
}

impl Default for GitHubPrMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

impl ServerHandler for GitHubPrMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "GitHub pull request MCP Server - create, list, view and comment on pull \
                 requests in the current repository using the gh CLI. Requires gh to be \
                 installed and authenticated."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<ListToolsResult> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<CallToolResult> {
        let args = request.arguments.map(Value::Object).unwrap_or(Value::Null);
        self.dispatch(&request.name, args).await.map_err(Into::into)
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for GitHubPrMcpServer {
    fn server_name(&self) -> &str {
        "github-pr"
    }

    fn server_description(&self) -> Option<&str> {
        Some("GitHub pull request tools (create, list, view, comment) backed by the gh CLI.")
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tools()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        self.dispatch(name, params).await.map_err(|e| match e {
            DispatchError::UnknownTool(name) => EmbeddableError::ToolNotFound(name),
            invalid @ DispatchError::InvalidParams { .. } => {
                EmbeddableError::InvalidParams(invalid.to_string())
            }
        })
    }
}
