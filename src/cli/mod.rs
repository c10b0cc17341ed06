//! CLI module
//!
//! Command-line interface for the harness.
//!
//! # Commands
//!
//! - `token` - Fetch an OAuth token and store it in the token file
//! - `infer` - Generate an interface declaration from a saved JSON response
//! - `run` - Run the banking flows against the configured base URL

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
