//! Command builders for the GitHub PR tools

mod pr;

pub use pr::*;
