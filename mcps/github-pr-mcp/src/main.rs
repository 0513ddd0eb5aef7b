//! GitHub PR MCP Server
//!
//! Exposes `create_pr`, `list_prs`, `view_pr` and `comment_pr` as MCP tools
//! over stdio, each backed by a `gh pr ...` invocation.
//!
//! # Requirements
//!
//! - GitHub CLI (`gh`) must be installed and in PATH (or configured)
//! - `gh` must be authenticated (`gh auth login`)
//!
//! # Usage
//!
//! Configure in `.mcp.json`:
//! ```json
//! {
//!   "mcpServers": {
//!     "github-pr": {
//!       "command": "./target/release/github-pr-mcp"
//!     }
//!   }
//! }
//! ```
//!
//! Optional settings live in `~/.binks/github-pr.toml` (or the file named by
//! `GITHUB_PR_MCP_CONFIG`):
//! ```toml
//! [gh]
//! binary = "gh"
//! working_dir = "/path/to/repo"
//! timeout_seconds = 120
//! ```

use github_pr_mcp::config::Config;
use github_pr_mcp::gh::GhCli;
use github_pr_mcp::GitHubPrMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("github_pr_mcp")?;

    tracing::info!("Starting GitHub PR MCP Server");

    let config = Config::load()?;

    // Continue on failure; each tool call reports its own gh error.
    if let Err(e) = GhCli::from_config(&config.gh).check_gh_available().await {
        tracing::warn!("gh CLI check failed: {}", e);
    }

    let server = GitHubPrMcpServer::from_config(&config);
    mcp_common::serve_stdio_until_interrupt(server).await
}
