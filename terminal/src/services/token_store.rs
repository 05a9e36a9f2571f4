//! Bearer token persistence.
//!
//! Exactly one token is kept, in a single file. The API client reads it on
//! every request; only login writes it and only logout or a rejected session
//! clears it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::private_file;
use crate::core::config;
use crate::core::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `MPOS_TOKEN_FILE`, else `.mpos/token`.
    pub fn from_env() -> Self {
        Self::new(config::token_file_from_env())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored token, if any. Unreadable and blank files count as no token.
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read token file");
                None
            }
        }
    }

    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        private_file::write(&self.path, token.as_bytes())?;
        tracing::debug!(path = %self.path.display(), "Token saved");
        Ok(())
    }

    /// Remove the stored token. A missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
