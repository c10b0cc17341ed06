//! Error types for the bank API harness
//!
//! Every fallible public API returns `Result<T, Error>` where `Error` is
//! defined here. Failures are never retried: each variant is surfaced to the
//! caller the first time it occurs.

use thiserror::Error;

/// The main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Failed to get OAuth token: {status}")]
    Authentication { status: u16, body: String },

    #[error("Token file error for '{path}': {message}")]
    TokenFile { path: String, message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Assertion Errors
    // ============================================================================
    #[error("Assertion failed: {message}")]
    Assertion { message: String },

    #[error("Expected status {expected} for {method} {url}, got {actual}")]
    UnexpectedStatus {
        method: String,
        url: String,
        expected: u16,
        actual: u16,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an authentication error from a token endpoint status
    pub fn authentication(status: u16, body: impl Into<String>) -> Self {
        Self::Authentication {
            status,
            body: body.into(),
        }
    }

    /// Create an assertion error
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            message: message.into(),
        }
    }

    /// Whether this failure belongs to a single test case rather than the run
    pub fn is_case_failure(&self) -> bool {
        matches!(self, Error::Assertion { .. } | Error::UnexpectedStatus { .. })
    }

    /// Whether this failure must abort the setup phase
    pub fn is_setup_failure(&self) -> bool {
        matches!(self, Error::Authentication { .. } | Error::TokenFile { .. })
    }
}

/// Result type alias for the harness
pub type Result<T> = std::result::Result<T, Error>;
