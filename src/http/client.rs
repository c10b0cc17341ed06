//! HTTP client
//!
//! A thin wrapper over `reqwest` that:
//! - joins paths onto a base URL
//! - applies default and per-request headers
//! - decodes the response body to JSON where possible
//! - reports non-2xx statuses as ordinary responses for the caller to assert on

use crate::error::{Error, Result};
use crate::types::{Method, StringMap};
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for relative request paths
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(60),
            default_headers: StringMap::new(),
            user_agent: format!("bank-api-harness/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Request headers
    pub headers: StringMap,
    /// Request body (JSON)
    pub body: Option<Value>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A completed exchange
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers (lower-cased names)
    pub headers: StringMap,
    /// Decoded body: JSON, the raw text if not JSON, `null` if empty
    pub body: Value,
    /// Time from send to fully read body
    pub elapsed: Duration,
}

impl ApiResponse {
    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Elapsed time in fractional milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// HTTP client bound to one base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Make a GET request
    pub async fn get(&self, url: &str) -> Result<ApiResponse> {
        self.send(Method::GET, url, RequestConfig::default()).await
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, url: &str, body: Value) -> Result<ApiResponse> {
        self.send(Method::POST, url, RequestConfig::default().json(body))
            .await
    }

    /// Send a request once and read the whole response
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<ApiResponse> {
        let full_url = self.build_url(url)?;

        let mut headers = self.config.default_headers.clone();
        headers.extend(config.headers);

        let mut req = self.client.request(method.into(), &full_url);
        for (key, value) in &headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        let started = Instant::now();
        let response = req.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let text = response.text().await?;
        let elapsed = started.elapsed();

        debug!("{} {} -> {} in {:?}", method, full_url, status, elapsed);

        Ok(ApiResponse {
            status,
            headers,
            body: decode_body(&text),
            elapsed,
        })
    }

    /// Build full URL from path
    pub fn build_url(&self, path: &str) -> Result<String> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(url::Url::parse(path)?.to_string());
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                let joined = format!("{base}/{path}");
                url::Url::parse(&joined)?;
                Ok(joined)
            }
            None => Err(Error::config(format!(
                "relative path '{path}' requires a base URL"
            ))),
        }
    }
}

fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
