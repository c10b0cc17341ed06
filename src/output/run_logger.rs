//! Per-test-case run logger
//!
//! Appends human-readable labeled sections to `<root>/<case>/log.txt`.
//! The file is write-only from the harness's point of view.

use crate::error::Result;
use crate::types::StringMap;
use serde::Serialize;
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A request as recorded in the log
#[derive(Debug, Clone, Serialize)]
pub struct RequestRecord {
    pub method: String,
    pub url: String,
    pub headers: StringMap,
    pub body: Value,
}

/// A response as recorded in the log
#[derive(Debug, Clone, Serialize)]
pub struct ResponseRecord {
    pub status: u16,
    pub headers: StringMap,
    pub body: Value,
}

/// Append-only log for one test case
#[derive(Debug, Clone)]
pub struct RunLogger {
    case_name: String,
    log_dir: PathBuf,
    log_file: PathBuf,
}

impl RunLogger {
    /// Create the logger, creating `<log_root>/<case_name>/` eagerly
    pub fn new(log_root: impl AsRef<Path>, case_name: &str) -> Result<Self> {
        let case_name = sanitize_case_name(case_name);
        let log_dir = log_root.as_ref().join(&case_name);
        std::fs::create_dir_all(&log_dir)?;
        let log_file = log_dir.join("log.txt");

        Ok(Self {
            case_name,
            log_dir,
            log_file,
        })
    }

    /// Case name after path sanitization
    pub fn case_name(&self) -> &str {
        &self.case_name
    }

    /// Directory holding this case's log
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Path of `log.txt`
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// `### Test Data ###` section
    pub fn log_test_data<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        self.append(&format!("### Test Data ###\n{}\n", pretty(data)?))
    }

    /// `### Request ###` section
    pub fn log_request(&self, request: &RequestRecord) -> Result<()> {
        self.append(&format!(
            "### Request ###\nMethod: {}\nURL: {}\nHeaders: {}\nBody: {}\n",
            request.method,
            request.url,
            pretty(&request.headers)?,
            pretty(&request.body)?
        ))
    }

    /// `### Response ###` section
    pub fn log_response(&self, response: &ResponseRecord) -> Result<()> {
        self.append(&format!(
            "### Response ###\nStatus: {}\nHeaders: {}\nBody: {}\n",
            response.status,
            pretty(&response.headers)?,
            pretty(&response.body)?
        ))
    }

    /// `### Performance Data ###` section, durations in milliseconds
    pub fn log_performance(&self, test_execution_ms: f64, response_ms: f64) -> Result<()> {
        self.append(&format!(
            "### Performance Data ###\nTest Execution Time: {test_execution_ms} ms\nResponse Time: {response_ms} ms\n"
        ))
    }

    /// Section with a caller-chosen label
    pub fn log_custom<T: Serialize + ?Sized>(&self, label: &str, data: &T) -> Result<()> {
        self.append(&format!("### {label} ###\n{}\n", pretty(data)?))
    }

    fn append(&self, section: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;
        writeln!(file, "{section}")?;
        debug!(
            "Appended {} bytes to {}",
            section.len() + 1,
            self.log_file.display()
        );
        Ok(())
    }
}

fn pretty<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Replace path separators so a title stays a single directory component
fn sanitize_case_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    match cleaned.trim() {
        "" | "." | ".." => "unnamed".to_string(),
        trimmed => trimmed.to_string(),
    }
}
