//! The on-disk session record.
//!
//! A successful login writes the user's profile as JSON to a fixed path;
//! logout deletes it; startup reads it back verbatim (trust-on-read, no
//! re-validation, no expiry). A record that fails to parse is treated as
//! absent: losing a demo session is strictly better than refusing to
//! start.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sublynx_core::auth::UserProfile;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Session file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Session record could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed storage for the session record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted session, if any.
    ///
    /// A missing file means no session. A file that exists but cannot be
    /// read or parsed is logged at warn level and treated as no session
    /// (fail-safe: the user just logs in again).
    pub fn load(&self) -> Option<UserProfile> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Failed to read session file");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Corrupt session record; treating as logged out"
                );
                None
            }
        }
    }

    /// Persist `profile` as the current session, creating parent
    /// directories as needed.
    pub fn save(&self, profile: &UserProfile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Delete the persisted session. Already-absent files are fine.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
