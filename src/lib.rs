// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Bank API Harness
//!
//! An end-to-end API test harness for a mocked banking service.
//!
//! ## Features
//!
//! - **OAuth2 Client Credentials**: One-shot token fetch threaded into scenarios
//! - **Fixtures**: Default-filled customer and account payloads with overrides
//! - **Timed Exchanges**: Requests against a base URL with wall-clock timing
//! - **Run Logs**: Per-case `log.txt` with labeled sections
//! - **Interface Inference**: TypeScript-style declarations from responses,
//!   appended once per name per suite file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bank_api_harness::{config::HarnessConfig, fixtures, scenario::{flows, Scenario}, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = HarnessConfig::from_env()?;
//!     let scenario = Scenario::new(&config, None, "should create a customer")?;
//!
//!     let customer = fixtures::create_bank_customer(None);
//!     flows::create_customer(&scenario, &customer).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Scenario (per test case)                  │
//! │  fixtures → exchange → expect_status → log → record_interface │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────┬──────────┬───────┴────┬─────────────┬─────────────┐
//! │   Auth   │   HTTP   │  Fixtures  │   Schema    │   Output    │
//! ├──────────┼──────────┼────────────┼─────────────┼─────────────┤
//! │ OAuth2 CC│ Base URL │ Customer   │ Tagged walk │ RunLogger   │
//! │ Token    │ Timing   │ Account    │ any[] empty │ Interface   │
//! │ file     │ No retry │ Overrides  │ Nested opt  │ Writer      │
//! └──────────┴──────────┴────────────┴─────────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the harness
pub mod error;

/// Common types and type aliases
pub mod types;

/// Harness configuration
pub mod config;

/// OAuth token acquisition and storage
pub mod auth;

/// HTTP client with timing
pub mod http;

/// Banking fixtures
pub mod fixtures;

/// Interface inference from JSON data
pub mod schema;

/// Run logs and interface files
pub mod output;

/// Scenario orchestration and banking flows
pub mod scenario;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::HarnessConfig;
pub use scenario::Scenario;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
