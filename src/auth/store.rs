//! Plain-text token file

use super::types::AuthContext;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads and writes the bearer token file shared between CLI phases
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store for the given file path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the token file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with the raw token
    pub fn save(&self, context: &AuthContext) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, &context.access_token)?;
        debug!("Saved token to {}", self.path.display());
        Ok(())
    }

    /// Load the token; a missing or blank file is an error
    pub fn load(&self) -> Result<AuthContext> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| Error::TokenFile {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let token = contents.trim();
        if token.is_empty() {
            return Err(Error::TokenFile {
                path: self.path.display().to_string(),
                message: "file is empty".to_string(),
            });
        }

        Ok(AuthContext::new(token))
    }
}
