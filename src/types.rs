//! Common types used throughout the harness
//!
//! Shared type aliases and small enums used by more than one module.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Header map with a stable, sorted iteration order for logging
pub type StringMap = BTreeMap<String, String>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl Method {
    /// Upper-case method name as it appears on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::PATCH => "PATCH",
            Method::DELETE => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PUT => reqwest::Method::PUT,
            Method::PATCH => reqwest::Method::PATCH,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

// ============================================================================
// Target Environment
// ============================================================================

/// Deployment environment the harness addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetEnvironment {
    #[default]
    Dev,
    Staging,
    Prod,
}

impl TargetEnvironment {
    /// Default API base URL for this environment
    pub fn base_url(self) -> &'static str {
        match self {
            TargetEnvironment::Dev => "https://api-dev.example.com",
            TargetEnvironment::Staging => "https://api-staging.example.com",
            TargetEnvironment::Prod => "https://api.example.com",
        }
    }
}

impl std::str::FromStr for TargetEnvironment {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" => Ok(TargetEnvironment::Dev),
            "staging" => Ok(TargetEnvironment::Staging),
            "prod" => Ok(TargetEnvironment::Prod),
            other => Err(crate::error::Error::invalid_value(
                "environment",
                format!("unknown environment '{other}' (expected dev, staging or prod)"),
            )),
        }
    }
}
