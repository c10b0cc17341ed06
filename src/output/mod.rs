//! Output module
//!
//! File sinks written by every scenario:
//! - `RunLogger` - per-test-case `log.txt` with labeled sections
//! - `InterfaceWriter` - per-suite interface declaration files, deduplicated
//!   by interface name

mod interface_writer;
mod run_logger;

pub use interface_writer::{InterfaceWriter, WriteOutcome};
pub use run_logger::{RequestRecord, ResponseRecord, RunLogger};
