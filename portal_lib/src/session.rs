//! Stored credentials: the session saved after login and read before every call.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use portal_api::{types::Role, AuthContext, LoginResponse};
use serde::{Deserialize, Serialize};

use crate::error::PortalError;

/// Credentials persisted between invocations.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_id: Option<String>,
    pub role: Option<Role>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn from_login(resp: &LoginResponse, now: DateTime<Utc>) -> Self {
        Self {
            token: resp.token.clone(),
            user_id: resp.user_id.clone(),
            role: resp.role,
            issued_at: now,
            expires_at: resp
                .expires_in
                .filter(|secs| *secs > 0)
                .and_then(Duration::try_seconds)
                .and_then(|ttl| now.checked_add_signed(ttl)),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// The credentials to send with requests. An expired session sends none.
    pub fn auth_context(&self, now: DateTime<Utc>) -> Result<AuthContext, PortalError> {
        if self.is_expired(now) {
            tracing::warn!("Stored session expired, sending requests without credentials");
            return Ok(AuthContext::anonymous());
        }
        Ok(AuthContext::with_bearer(&self.token)?)
    }
}

/// JSON file holding at most one [`Session`].
#[derive(Clone, Debug)]
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

    /// Reads the stored session. A missing or unreadable-as-JSON file is no session.
    pub fn load(&self) -> Result<Option<Session>, PortalError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                tracing::error!("Failed to read session file {}: {}", self.path.display(), e);
                return Err(e.into());
            }
        };
        match serde_json::from_str::<Session>(&text) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(
                    "Ignoring corrupt session file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), PortalError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json).map_err(|e| {
            tracing::error!("Failed to write session file {}: {}", self.path.display(), e);
            PortalError::Session(e)
        })
    }

    /// Deletes the stored session. Returns whether one existed.
    pub fn clear(&self) -> Result<bool, PortalError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap()
    }

    fn login(expires_in: Option<i64>) -> LoginResponse {
        LoginResponse {
            token: "tok".to_string(),
            user_id: Some("S-1".to_string()),
            role: Some(Role::Student),
            expires_in,
        }
    }

    #[test]
    fn expiry_from_login() {
        let session = Session::from_login(&login(Some(60)), now());
        assert_eq!(session.expires_at, Some(now() + Duration::seconds(60)));
        assert!(!session.is_expired(now()));
        assert!(session.is_expired(now() + Duration::seconds(60)));
    }

    #[test]
    fn no_expiry_never_expires() {
        let session = Session::from_login(&login(None), now());
        assert!(!session.is_expired(now() + Duration::days(3650)));
        let session = Session::from_login(&login(Some(0)), now());
        assert!(session.expires_at.is_none());
        let session = Session::from_login(&login(Some(i64::MAX)), now());
        assert!(session.expires_at.is_none());
    }

    #[test]
    fn expired_session_is_anonymous() {
        let session = Session::from_login(&login(Some(1)), now());
        assert!(session.auth_context(now()).unwrap().is_authenticated());
        assert!(!session
            .auth_context(now() + Duration::seconds(5))
            .unwrap()
            .is_authenticated());
    }

    #[test]
    fn save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));
        assert_eq!(store.load().unwrap(), None);

        let session = Session::from_login(&login(Some(3600)), now());
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        assert!(store.clear().unwrap());
        assert!(!store.clear().unwrap());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ definitely not json").unwrap();
        assert_eq!(SessionStore::new(path).load().unwrap(), None);
    }
}
