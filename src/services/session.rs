//! Session store: the single holder of the current authentication state.
//!
//! The state is cached in memory and written through to a [`SessionStorage`]
//! backend so it survives restarts until an explicit logout. Every other
//! component receives a [`SessionStore`] handle instead of touching storage.

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::auth::Role,
};

/// Display name shown when nobody is logged in
pub const GUEST_DISPLAY_NAME: &str = "Guest";

/// Persisted authentication state.
///
/// `role` and `display_name` are only meaningful while `token` is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(rename = "userFullName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Durable key/value backend for the session
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> AppResult<Option<Session>>;
    fn save(&self, session: &Session) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// JSON document on disk, replaced atomically on every save
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> AppResult<Option<Session>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read session file {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        match serde_json::from_slice(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Ignoring unreadable session file: {}",
                    e
                );
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.temp_path();
        let mut file = fs::File::create(&tmp)?;
        file.write_all(&serde_json::to_vec_pretty(session)?)?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            AppError::Storage(format!(
                "Failed to replace session file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to remove session file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

/// Process-local storage, lost on exit
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<Session>>,
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> AppResult<Option<Session>> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, session: &Session) -> AppResult<()> {
        *self.slot.lock() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.slot.lock() = None;
        Ok(())
    }
}

/// Cloneable handle on the current session
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<RwLock<Session>>,
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    /// Load the persisted session (if any) from `storage`
    pub fn open(storage: Arc<dyn SessionStorage>) -> AppResult<Self> {
        let session = storage.load()?.unwrap_or_default();
        if session.token.is_some() {
            tracing::debug!(role = ?session.role, "Restored persisted session");
        }

        Ok(Self {
            state: Arc::new(RwLock::new(session)),
            storage,
        })
    }

    /// Ephemeral store backed by [`MemoryStorage`]
    pub fn in_memory() -> Self {
        Self {
            state: Arc::new(RwLock::new(Session::default())),
            storage: Arc::new(MemoryStorage::default()),
        }
    }

    /// Store a new token and role.
    ///
    /// `display_name = None` keeps the name already on record. The storage
    /// write happens under the write lock, before the cached copy changes, so
    /// readers see either the old or the new session, never a mix.
    pub fn set_session(
        &self,
        token: impl Into<String>,
        role: Option<Role>,
        display_name: Option<String>,
    ) -> AppResult<()> {
        let mut state = self.state.write();
        let next = Session {
            token: Some(token.into()),
            role,
            display_name: display_name.or_else(|| state.display_name.clone()),
        };
        self.storage.save(&next)?;
        *state = next;
        Ok(())
    }

    /// Remove token, role and display name
    pub fn clear_session(&self) -> AppResult<()> {
        let mut state = self.state.write();
        self.storage.clear()?;
        *state = Session::default();
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    pub fn role(&self) -> Option<Role> {
        let state = self.state.read();
        state.token.as_ref().and(state.role)
    }

    pub fn display_name(&self) -> String {
        let state = self.state.read();
        state
            .token
            .as_ref()
            .and(state.display_name.clone())
            .unwrap_or_else(|| GUEST_DISPLAY_NAME.to_string())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().token.is_some()
    }

    /// Consistent copy of all three fields
    pub fn snapshot(&self) -> Session {
        self.state.read().clone()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("SessionStore")
            .field("authenticated", &state.token.is_some())
            .field("role", &state.role)
            .finish()
    }
}
