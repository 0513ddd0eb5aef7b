//! GitHub PR MCP Library
//!
//! MCP-compatible pull request tools via the `gh` CLI.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use github_pr_mcp::GitHubPrMcpServer;
//! use mcp_common::EmbeddableMcp;
//!
//! let server = GitHubPrMcpServer::new();
//! let reply = server
//!     .call_tool("list_prs", serde_json::json!({ "state": "open", "limit": 5 }))
//!     .await?;
//! ```
//!
//! # Tools
//! - `create_pr`: title, optional body/base/head/draft
//! - `list_prs`: optional state/base/limit
//! - `view_pr`: number
//! - `comment_pr`: number, body
//!
//! # Requirements
//! - `gh` CLI installed and authenticated (`gh auth login`)
//! - run from (or configure `working_dir` to) a checked-out repository

pub mod config;
pub mod gh;
pub mod handlers;
pub mod params;
pub mod schema;
pub mod server;
pub mod tools;

// Re-export main server type
pub use server::{DispatchError, GitHubPrMcpServer};

// Re-export parameter types for direct API usage
pub use params::*;
