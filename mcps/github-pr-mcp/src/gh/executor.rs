//! Async executor for gh CLI commands
//!
//! [`GhCli`] runs the gh binary with an argument vector (no shell) and
//! captures its output. The dispatcher only sees the [`CommandRunner`]
//! trait, so tests can substitute a simulated CLI.
//!
//! # Example
//!
//! ```rust,ignore
//! use github_pr_mcp::gh::{CommandRunner, GhCli, GhCommand};
//!
//! let gh = GhCli::new("gh");
//! let out = gh.run(&GhCommand::new(&["pr", "view"]).arg("42")).await?;
//! ```

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, error, instrument};

use super::command::GhCommand;
use super::error::{GhError, GhResult};
use crate::config::GhConfig;

/// Something that can execute a gh invocation and return its stdout
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command; `Ok` carries stdout unmodified
    async fn run(&self, command: &GhCommand) -> GhResult<String>;
}

/// The real gh CLI
#[derive(Debug, Clone)]
pub struct GhCli {
    binary: String,
    working_dir: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl GhCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            working_dir: None,
            timeout: None,
        }
    }

    pub fn from_config(config: &GhConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            working_dir: config.working_dir.clone(),
            timeout: config.timeout_seconds.map(Duration::from_secs),
        }
    }

    /// Run gh from this directory instead of the server's cwd
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Kill gh if it runs longer than this
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Spawn gh with `args` and wait for it to exit
    async fn output(&self, args: &[&str]) -> GhResult<Output> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        let child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GhError::NotFound {
                    binary: self.binary.clone(),
                }
            } else {
                GhError::SpawnError(e)
            }
        })?;

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| {
                    error!(seconds = limit.as_secs(), "gh command timed out");
                    GhError::TimedOut {
                        seconds: limit.as_secs(),
                    }
                })?
                .map_err(GhError::SpawnError),
            None => Ok(child.wait_with_output().await?),
        }
    }

    /// Check that gh is installed and authenticated
    ///
    /// Runs `gh auth status`. Used as a startup probe only; a failure is
    /// logged and each tool call reports its own error.
    #[instrument(skip(self), fields(binary = %self.binary))]
    pub async fn check_gh_available(&self) -> GhResult<()> {
        debug!("checking gh availability");

        let output = self.output(&["auth", "status"]).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            if is_auth_failure(&stderr) {
                return Err(GhError::NotAuthenticated { stderr });
            }
            return Err(GhError::CommandFailed {
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        debug!("gh is available and authenticated");
        Ok(())
    }
}

#[async_trait]
impl CommandRunner for GhCli {
    #[instrument(skip(self, command), fields(cmd = %command))]
    async fn run(&self, command: &GhCommand) -> GhResult<String> {
        debug!("executing: {} {}", self.binary, command);

        let output = self.output(&command.argv()).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            let code = output.status.code().unwrap_or(-1);

            if is_auth_failure(&stderr) {
                error!("gh authentication required");
                return Err(GhError::NotAuthenticated { stderr });
            }

            error!(code, stderr = %stderr, "gh command failed");
            return Err(GhError::CommandFailed { code, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

fn is_auth_failure(stderr: &str) -> bool {
    stderr.contains("gh auth login") || stderr.contains("not logged in")
}
