//! gh CLI wrapper module
//!
//! Invocation model, async executor and error types for the `gh` CLI.

pub mod command;
pub mod error;
pub mod executor;

pub use command::{GhArg, GhCommand};
pub use error::{GhError, GhResult};
pub use executor::{CommandRunner, GhCli};
