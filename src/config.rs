//! Harness configuration
//!
//! `HarnessConfig` is built once (from defaults, an optional YAML file and
//! the process environment) and passed explicitly into every scenario.
//! Nothing downstream reads the environment on its own.

use crate::auth::OAuthCredentials;
use crate::error::{Error, Result};
use crate::types::TargetEnvironment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable toggling interface generation
pub const GENERATE_INTERFACES_VAR: &str = "GENERATETYPESCRIPTINTERFACES";

/// Environment variable overriding the API base URL
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Environment variable selecting dev, staging or prod
pub const TARGET_ENV_VAR: &str = "TEST_ENV";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete harness configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Target environment; supplies the base URL when none is set
    pub environment: TargetEnvironment,

    /// Explicit base URL, overriding the environment default
    pub base_url: Option<String>,

    /// Write inferred interface declarations for response bodies
    pub generate_interfaces: bool,

    /// Expand nested objects into child interfaces
    pub nested_interfaces: bool,

    /// Root directory for per-case `log.txt` files
    pub log_root: PathBuf,

    /// Root directory for generated interface files
    pub interface_root: PathBuf,

    /// Extension of generated interface files
    pub interface_extension: String,

    /// Plain-text bearer token file used between CLI phases
    pub token_file: PathBuf,

    /// Token endpoint credentials
    pub oauth: OAuthCredentials,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            environment: TargetEnvironment::Dev,
            base_url: None,
            generate_interfaces: false,
            nested_interfaces: false,
            log_root: PathBuf::from("./logs"),
            interface_root: PathBuf::from("./generatedInterfaces"),
            interface_extension: "ts".to_string(),
            token_file: PathBuf::from("token.txt"),
            oauth: OAuthCredentials::default(),
            timeout_secs: 60,
        }
    }
}

impl HarnessConfig {
    /// Parse a YAML document; missing keys take their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    /// Overlay `BASE_URL`, `TEST_ENV` and `GENERATETYPESCRIPTINTERFACES`
    /// using `lookup` as the variable source
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(env) = lookup(TARGET_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            self.environment = env.parse()?;
        }
        if let Some(url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            self.base_url = Some(url.trim().to_string());
        }
        if let Some(flag) = lookup(GENERATE_INTERFACES_VAR) {
            self.generate_interfaces = parse_flag(&flag);
        }
        self.validate()?;
        Ok(self)
    }

    /// Explicit base URL, else the environment's default
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check values that deserialization alone cannot
    pub fn validate(&self) -> Result<()> {
        let base = self.resolved_base_url();
        let parsed = url::Url::parse(base)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }
        if self.interface_extension.trim_start_matches('.').is_empty() {
            return Err(Error::invalid_value(
                "interface_extension",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

/// Boolean-like flag: set and not one of `0`, `false`, `no`, `off`
pub fn parse_flag(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    !value.is_empty() && !matches!(value.as_str(), "0" | "false" | "no" | "off")
}
