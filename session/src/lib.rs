// session/src/lib.rs

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use models::Role;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("not authenticated")]
    NotAuthenticated,
}

/// The signed-in administrator, persisted locally between visits.
///
/// Its presence is what unlocks protected routes. Validating or expiring the
/// underlying account is the backing API's business; nothing here inspects
/// the marker beyond deserializing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub logged_in_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn new(email: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        AuthSession {
            email: email.into(),
            name: name.into(),
            role,
            logged_in_at: Utc::now(),
        }
    }
}

/// Where the session marker lives between runs.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<AuthSession>, SessionError>;
    fn save(&self, session: &AuthSession) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// A JSON file on disk, the moral equivalent of the browser's local storage
/// slot the web console used.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSessionStore { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<AuthSession>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        // A corrupt marker reads as signed-out, not as an error.
        Ok(serde_json::from_str(&raw).ok())
    }

    fn save(&self, session: &AuthSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<AuthSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<AuthSession>, SessionError> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn save(&self, session: &AuthSession) -> Result<(), SessionError> {
        *self.slot.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

/// Protected-view wrapper: a present marker lets the view render, an absent
/// one bounces the visitor to the login route.
#[derive(Debug)]
pub struct SessionGate<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionGate<S> {
    pub fn new(store: S) -> Self {
        SessionGate { store }
    }

    /// Presence alone gates access; the marker's contents are not validated.
    pub fn authorize(&self) -> Result<AuthSession, SessionError> {
        self.store.load()?.ok_or(SessionError::NotAuthenticated)
    }

    pub fn login(&self, session: &AuthSession) -> Result<(), SessionError> {
        self.store.save(session)
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.clear()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AuthSession {
        AuthSession::new("admin@example.com", "Admin", Role::Admin)
    }

    #[test]
    fn should_deny_when_no_marker_is_present() {
        let gate = SessionGate::new(MemorySessionStore::new());
        assert!(matches!(
            gate.authorize(),
            Err(SessionError::NotAuthenticated)
        ));
    }

    #[test]
    fn should_authorize_after_login_and_deny_after_logout() {
        let gate = SessionGate::new(MemorySessionStore::new());
        gate.login(&sample()).unwrap();
        assert_eq!(gate.authorize().unwrap().email, "admin@example.com");

        gate.logout().unwrap();
        assert!(gate.authorize().is_err());
    }

    #[test]
    fn should_round_trip_marker_through_file() {
        let path = std::env::temp_dir().join(format!("session_{}.json", uuid::Uuid::new_v4()));
        let store = FileSessionStore::new(&path);

        let session = sample();
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn should_read_corrupt_marker_as_signed_out() {
        let path = std::env::temp_dir().join(format!("session_{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileSessionStore::new(&path);
        assert_eq!(store.load().unwrap(), None);

        std::fs::remove_file(&path).unwrap();
    }
}
