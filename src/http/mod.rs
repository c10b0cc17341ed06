//! HTTP client module
//!
//! Issues requests against the configured API base URL and returns decoded,
//! timed responses.
//!
//! # Features
//!
//! - **Base URL Joining**: Relative paths resolve against the environment URL
//! - **Default Headers**: e.g. `Authorization: Bearer <token>` on every call
//! - **Timing**: Wall-clock duration of each exchange
//! - **No Retries**: Every request is attempted exactly once

mod client;

pub use client::{ApiResponse, HttpClient, HttpClientConfig, RequestConfig};
