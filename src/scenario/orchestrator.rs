//! Scenario context and timed exchanges

use crate::auth::AuthContext;
use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::http::{ApiResponse, HttpClient, HttpClientConfig, RequestConfig};
use crate::output::{InterfaceWriter, RequestRecord, ResponseRecord, RunLogger, WriteOutcome};
use crate::types::{Method, StringMap};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};

/// One request/response pair as issued by a scenario
#[derive(Debug, Clone)]
pub struct Exchange {
    /// The request as logged
    pub request: RequestRecord,
    /// The decoded, timed response
    pub response: ApiResponse,
}

impl Exchange {
    /// HTTP status of the response
    pub fn status(&self) -> u16 {
        self.response.status
    }

    /// Decoded response body
    pub fn body(&self) -> &Value {
        &self.response.body
    }

    /// Response time in milliseconds
    pub fn response_ms(&self) -> f64 {
        self.response.elapsed_ms()
    }

    /// Fail the case unless the status is `expected`
    pub fn expect_status(&self, expected: u16) -> Result<&Self> {
        if self.response.status == expected {
            Ok(self)
        } else {
            Err(Error::UnexpectedStatus {
                method: self.request.method.clone(),
                url: self.request.url.clone(),
                expected,
                actual: self.response.status,
            })
        }
    }
}

/// Context for a single test case
#[derive(Debug)]
pub struct Scenario {
    http: HttpClient,
    logger: RunLogger,
    interfaces: InterfaceWriter,
    generate_interfaces: bool,
    started: Instant,
}

impl Scenario {
    /// Build the context for `case_name`; creates its log directory
    ///
    /// When `auth` is given every request carries its bearer header.
    pub fn new(config: &HarnessConfig, auth: Option<&AuthContext>, case_name: &str) -> Result<Self> {
        let mut http_config = HttpClientConfig::builder()
            .base_url(config.resolved_base_url())
            .timeout(config.timeout());
        if let Some(auth) = auth {
            http_config = http_config.header("Authorization", auth.bearer_header());
        }
        let http = HttpClient::with_config(http_config.build())?;

        let logger = RunLogger::new(&config.log_root, case_name)?;
        let interfaces = InterfaceWriter::new(&config.interface_root)
            .with_extension(config.interface_extension.as_str())
            .with_nested_interfaces(config.nested_interfaces);

        info!("Starting scenario '{}'", logger.case_name());
        Ok(Self {
            http,
            logger,
            interfaces,
            generate_interfaces: config.generate_interfaces,
            started: Instant::now(),
        })
    }

    /// The case's run logger
    pub fn logger(&self) -> &RunLogger {
        &self.logger
    }

    /// Issue a request with an optional JSON body
    pub async fn exchange(&self, method: Method, path: &str, body: Option<Value>) -> Result<Exchange> {
        let mut config = RequestConfig::new();
        if let Some(body) = body {
            config = config.json(body);
        }
        self.exchange_with(method, path, config).await
    }

    /// Issue a request, time it, and log the request and response sections
    ///
    /// The request section is written before sending so a transport failure
    /// still leaves it on disk.
    pub async fn exchange_with(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<Exchange> {
        let mut headers: StringMap = self.http.config().default_headers.clone();
        headers.extend(config.headers.clone());
        if config.body.is_some() {
            headers
                .entry("Content-Type".to_string())
                .or_insert_with(|| "application/json".to_string());
        }

        let request = RequestRecord {
            method: method.to_string(),
            url: path.to_string(),
            headers,
            body: config.body.clone().unwrap_or(Value::Null),
        };

        self.logger.log_request(&request)?;
        let response = self.http.send(method, path, config).await?;
        self.logger.log_response(&ResponseRecord {
            status: response.status,
            headers: response.headers.clone(),
            body: response.body.clone(),
        })?;

        Ok(Exchange { request, response })
    }

    /// Write an interface for `payload` when generation is enabled
    ///
    /// Returns `None` when disabled.
    pub fn record_interface(
        &self,
        payload: &Value,
        interface_name: &str,
        suite_name: &str,
    ) -> Result<Option<WriteOutcome>> {
        if !self.generate_interfaces {
            debug!("Interface generation disabled, not recording {}", interface_name);
            return Ok(None);
        }
        self.interfaces
            .write_declaration(payload, interface_name, suite_name)
            .map(Some)
    }

    /// Milliseconds since the scenario was created
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Log the performance section: total case time and `response_ms`
    pub fn finish(&self, response_ms: f64) -> Result<()> {
        let total = self.elapsed_ms();
        self.logger.log_performance(total, response_ms)?;
        info!(
            "Scenario '{}' finished in {:.2} ms ({:.2} ms in responses)",
            self.logger.case_name(),
            total,
            response_ms
        );
        Ok(())
    }
}
