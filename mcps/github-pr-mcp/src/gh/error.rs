//! Error types for gh CLI operations
//!
//! Every variant's message is what the caller ultimately sees in a flagged
//! tool reply, so the captured stderr is embedded verbatim.

use thiserror::Error;

/// Errors that can occur when executing gh CLI commands
#[derive(Error, Debug)]
pub enum GhError {
    /// The gh command failed with a non-zero exit code
    #[error("gh command failed (exit code {code}): {stderr}")]
    CommandFailed {
        /// Exit code from the gh process (-1 when killed by a signal)
        code: i32,
        /// Standard error output from gh
        stderr: String,
    },

    /// Failed to spawn or wait on the gh process
    #[error("failed to spawn gh process: {0}")]
    SpawnError(#[from] std::io::Error),

    /// gh CLI is not installed or not in PATH
    #[error("gh CLI not found ({binary}) - ensure gh is installed and in PATH")]
    NotFound {
        /// Binary name or path that could not be resolved
        binary: String,
    },

    /// gh CLI is not authenticated
    #[error("gh CLI not authenticated - run 'gh auth login' first: {stderr}")]
    NotAuthenticated {
        /// Standard error output from gh
        stderr: String,
    },

    /// gh did not finish within the configured timeout
    #[error("gh command timed out after {seconds}s")]
    TimedOut {
        /// Configured timeout
        seconds: u64,
    },
}

/// Result type alias for gh operations
pub type GhResult<T> = Result<T, GhError>;
