//! Server initialization utilities
//!
//! Tracing setup and stdio serving shared by the MCP servers in this
//! workspace. stdout belongs to the MCP protocol, so every log line goes to
//! stderr.

use rmcp::{transport::stdio, ServerHandler, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for an MCP server binary
///
/// - stderr writer, no ANSI colors
/// - `RUST_LOG` filtering with `<crate_name>=info` as the default directive
/// - `LOG_FORMAT=json` switches to structured JSON lines
///
/// # Example
///
/// ```rust,ignore
/// mcp_common::init_tracing("github_pr_mcp")?;
/// ```
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let registry = tracing_subscriber::registry().with(filter);

    if json_logs_requested(std::env::var("LOG_FORMAT").ok().as_deref()) {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

fn json_logs_requested(log_format: Option<&str>) -> bool {
    log_format
        .map(|v| v.trim().eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Serve an MCP handler over stdio until the client disconnects or the
/// process receives an interrupt
///
/// On Ctrl-C the running service is cancelled and `Ok(())` is returned, so
/// the binary exits with status zero.
pub async fn serve_stdio_until_interrupt<S>(server: S) -> anyhow::Result<()>
where
    S: ServerHandler,
{
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    tokio::select! {
        quit = service.waiting() => {
            let reason = quit?;
            tracing::info!(?reason, "Transport closed");
        }
        // Dropping the pending `waiting()` future drops the service, which
        // cancels it and closes the transport.
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("Interrupt received");
        }
    }

    tracing::info!("Server shutting down");
    Ok(())
}
