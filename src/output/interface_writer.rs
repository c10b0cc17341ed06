//! Interface declaration file writer
//!
//! Appends inferred declarations to `<root>/<suite>.<ext>`, skipping any
//! interface name already present in that file.

use crate::error::Result;
use crate::schema::{render_declarations, InterfaceDeclaration, InterfaceInferrer};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Per-file locks serializing the check-then-append sequence across threads
static FILE_LOCKS: Lazy<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Locks are keyed on the canonical parent directory so `gen/x.ts` and
/// `./gen/x.ts` share one lock. One entry per distinct target file.
pub(crate) fn lock_for(path: &Path) -> Result<Arc<Mutex<()>>> {
    let key = match (path.parent(), path.file_name()) {
        (Some(parent), Some(file_name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            parent.canonicalize()?.join(file_name)
        }
        _ => path.to_path_buf(),
    };
    let mut locks = FILE_LOCKS.lock().unwrap_or_else(PoisonError::into_inner);
    Ok(locks
        .entry(key)
        .or_insert_with(|| Arc::new(Mutex::new(())))
        .clone())
}

/// Result of a declaration write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The declaration was appended
    Written,
    /// A declaration with the same name was already in the file
    Skipped,
}

/// Writes inferred interface declarations to per-suite files
#[derive(Debug, Clone)]
pub struct InterfaceWriter {
    root: PathBuf,
    extension: String,
    inferrer: InterfaceInferrer,
}

impl InterfaceWriter {
    /// Create a writer rooted at `root` producing `.ts` files
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extension: "ts".to_string(),
            inferrer: InterfaceInferrer::new(),
        }
    }

    /// Set the file extension (without the leading dot)
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Expand nested objects into child interfaces
    #[must_use]
    pub fn with_nested_interfaces(mut self, enabled: bool) -> Self {
        self.inferrer = self.inferrer.with_nested_interfaces(enabled);
        self
    }

    /// Target file for a suite; independent of the interface name
    pub fn path_for_suite(&self, suite_name: &str) -> PathBuf {
        self.root.join(format!("{suite_name}.{}", self.extension))
    }

    /// Infer declarations from `payload` and append them unless the suite
    /// file already declares `interface_name`. Nested child declarations
    /// whose names are already in the file are left out.
    pub fn write_declaration(
        &self,
        payload: &Value,
        interface_name: &str,
        suite_name: &str,
    ) -> Result<WriteOutcome> {
        let declarations = self.inferrer.infer(payload, interface_name);
        let path = self.path_for_suite(suite_name);

        // Suite names may contain separators
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let lock = lock_for(&path)?;
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let existing = if path.exists() {
            std::fs::read_to_string(&path)?
        } else {
            String::new()
        };
        if existing.contains(&InterfaceDeclaration::header(interface_name)) {
            debug!(
                "Interface {} already present in {}, skipping",
                interface_name,
                path.display()
            );
            return Ok(WriteOutcome::Skipped);
        }

        let fresh: Vec<InterfaceDeclaration> = declarations
            .into_iter()
            .filter(|d| {
                let present = existing.contains(&InterfaceDeclaration::header(&d.name));
                if present {
                    debug!("Interface {} already present, omitting", d.name);
                }
                !present
            })
            .collect();

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", render_declarations(&fresh))?;

        info!("Wrote interface {} to {}", interface_name, path.display());
        Ok(WriteOutcome::Written)
    }
}
