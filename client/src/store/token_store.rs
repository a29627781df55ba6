//! Credential persistence.
//!
//! The only durable client state is the bearer token (and optionally the
//! logged-in user). Access is abstracted behind [`TokenStore`] so the
//! backing storage can be swapped per platform; the file implementation is
//! the default, the in-memory one backs tests.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use shared::User;

use crate::error::ApiError;

/// What gets persisted between sessions. Nothing else is stored locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub user: Option<User>,
}

/// Durable storage for the auth session.
///
/// The auth store is the single writer; the API client additionally clears
/// the session when the server answers 401.
pub trait TokenStore: Send + Sync {
    fn save_session(&self, session: &StoredSession) -> Result<(), ApiError>;
    fn load_session(&self) -> Result<Option<StoredSession>, ApiError>;
    fn clear_session(&self) -> Result<(), ApiError>;
}

/// JSON-file-backed token store under the platform config directory.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store at the default location, e.g. `~/.config/pocketbook/session.json`.
    pub fn new() -> Result<Self, ApiError> {
        let base = dirs::config_dir()
            .ok_or_else(|| ApiError::Storage("no config directory available".to_string()))?;
        Ok(Self {
            path: base.join("pocketbook").join("session.json"),
        })
    }

    /// Store at an explicit path (used by tests).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn save_session(&self, session: &StoredSession) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ApiError::Storage(format!("create {}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string(session)
            .map_err(|e| ApiError::Storage(format!("serialize session: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| ApiError::Storage(format!("write {}: {e}", self.path.display())))?;
        debug!("Saved session to {}", self.path.display());
        Ok(())
    }

    fn load_session(&self) -> Result<Option<StoredSession>, ApiError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ApiError::Storage(format!(
                    "read {}: {e}",
                    self.path.display()
                )))
            }
        };
        match serde_json::from_str(&json) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // A corrupt session file is treated as logged out.
                warn!("Discarding unreadable session file: {e}");
                let _ = fs::remove_file(&self.path);
                Ok(None)
            }
        }
    }

    fn clear_session(&self) -> Result<(), ApiError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Storage(format!(
                "remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}

/// In-memory token store for tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    session: Mutex<Option<StoredSession>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save_session(&self, session: &StoredSession) -> Result<(), ApiError> {
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn load_session(&self) -> Result<Option<StoredSession>, ApiError> {
        Ok(self.session.lock().unwrap().clone())
    }

    fn clear_session(&self) -> Result<(), ApiError> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}
