//! MCP Common - Shared utilities for MCP servers
//!
//! - **Initialization**: tracing setup and interrupt-aware stdio serving
//! - **Results**: single-text-block reply envelopes, plain or flagged
//! - **Errors**: protocol error constructors with consistent codes
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution
//!
//! # Example
//!
//! ```rust,ignore
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     mcp_common::init_tracing("my_mcp")?;
//!     mcp_common::serve_stdio_until_interrupt(MyServer::new()).await
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{invalid_params, method_not_found, McpResult};
pub use init::{init_tracing, serve_stdio_until_interrupt};
pub use result::{reply_text, text_error, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
