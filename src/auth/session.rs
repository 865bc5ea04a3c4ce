//! Doctor login session: the persisted record and its store.
//!
//! The store keeps exactly one session record as a JSON file and re-reads
//! it on every call - there is no in-memory copy, so an external clear is
//! observed by the very next read. Validity is purely structural; there is
//! no expiry and no refresh.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{DoctorRecord, LoginResponse};

/// Session file name in the store directory
const SESSION_FILE: &str = "session.json";

/// Legacy standalone doctor-id file written by old app versions.
/// Never written here; removed alongside the session on clear.
const LEGACY_DOCTOR_ID_FILE: &str = "doctor_id";

/// Directory name under the per-user data dir
const APP_DIR: &str = "healto";

/// One authenticated doctor's login state.
///
/// Wire keys (`isLoggedIn`, `userData`, `loginTime`) match the layout the
/// mobile app has always persisted, so existing session files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub is_logged_in: bool,
    /// Opaque bearer credential issued at login.
    pub token: String,
    #[serde(default)]
    pub user_data: Option<DoctorRecord>,
    /// Informational only - not used for expiry.
    pub login_time: DateTime<Utc>,
    #[serde(default)]
    pub username: Option<String>,
}

impl Session {
    /// Builds the session record from a successful login response.
    pub fn from_login(username: &str, response: &LoginResponse) -> Self {
        Self {
            is_logged_in: true,
            token: response.token.clone(),
            user_data: Some(response.data.doctor.clone()),
            login_time: Utc::now(),
            username: Some(username.to_string()),
        }
    }

    /// Structural validity: logged-in flag set, non-empty token, and a
    /// doctor record with an id. Nothing expires; a token is used until
    /// explicit logout or a server-side rejection.
    pub fn is_valid(&self) -> bool {
        self.is_logged_in
            && !self.token.is_empty()
            && self.user_data.as_ref().is_some_and(|d| d.id.is_some())
    }
}

/// Read-through access to the stored session, injected into `ApiClient`.
///
/// `SessionStore` is the production implementation; tests substitute fakes
/// to exercise the client with deterministic sessions.
pub trait SessionProvider: Send + Sync {
    /// Token to send as `Authorization: Bearer <token>`, if one is stored.
    /// `None` means the call goes out unauthenticated.
    fn bearer_token(&self) -> Option<String>;

    /// Called when the server rejects the credential (HTTP 401) so the
    /// session transitions to invalid.
    fn invalidate(&self);
}

/// Durable key-value persistence of exactly one session record.
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the default per-user data directory.
    pub fn open_default() -> Result<Self> {
        let data_dir =
            dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(Self::new(data_dir.join(APP_DIR)))
    }

    /// Persist the session as a whole-record replacement.
    pub fn save(&self, session: &Session) -> Result<()> {
        let path = self.session_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(session)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write session file {}", path.display()))?;
        debug!(
            doctor = session
                .user_data
                .as_ref()
                .and_then(|d| d.name.as_deref())
                .unwrap_or(""),
            "Session saved"
        );
        Ok(())
    }

    /// Re-reads the store on every call. An absent or unparseable file is
    /// "no session", never an error.
    pub fn load(&self) -> Option<Session> {
        let contents = std::fs::read_to_string(self.session_path()).ok()?;
        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(error = %err, "Discarding unparseable session file");
                None
            }
        }
    }

    /// Applies the structural invariant to the stored record.
    pub fn is_valid(&self) -> bool {
        self.load().as_ref().map(Session::is_valid).unwrap_or(false)
    }

    /// Removes the session and the legacy doctor-id file. Idempotent.
    pub fn clear(&self) -> Result<()> {
        for file in [SESSION_FILE, LEGACY_DOCTOR_ID_FILE] {
            let path = self.dir.join(file);
            if path.exists() {
                std::fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            }
        }
        Ok(())
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }
}

impl SessionProvider for SessionStore {
    fn bearer_token(&self) -> Option<String> {
        // Token presence is all the gateway checks; a stale token simply
        // earns a 401 from the server.
        self.load().map(|s| s.token).filter(|t| !t.is_empty())
    }

    fn invalidate(&self) {
        if let Err(err) = self.clear() {
            warn!(error = %err, "Failed to clear session after auth rejection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, SessionStore) {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join(APP_DIR));
        (dir, store)
    }

    fn sample_session() -> Session {
        Session {
            is_logged_in: true,
            token: "tok-abc123".to_string(),
            user_data: Some(DoctorRecord {
                id: Some(12),
                name: Some("Asha Rao".to_string()),
                email: Some("asha@example.com".to_string()),
                phone: Some("9876543210".to_string()),
                ..Default::default()
            }),
            login_time: Utc::now(),
            username: Some("asha".to_string()),
        }
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let (_dir, store) = store();
        let session = sample_session();

        store.save(&session).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, session);
        assert!(store.is_valid());
    }

    #[test]
    fn test_wire_layout_matches_app() {
        let json = serde_json::to_value(sample_session()).unwrap();
        assert_eq!(json.get("isLoggedIn"), Some(&serde_json::json!(true)));
        assert!(json.get("userData").is_some());
        assert!(json.get("loginTime").is_some());
        assert!(json.get("token").is_some());
    }

    #[test]
    fn test_structural_validity() {
        let valid = sample_session();
        assert!(valid.is_valid());

        let mut no_token = sample_session();
        no_token.token = String::new();
        assert!(!no_token.is_valid());

        let mut no_user = sample_session();
        no_user.user_data = None;
        assert!(!no_user.is_valid());

        let mut no_id = sample_session();
        no_id.user_data.as_mut().unwrap().id = None;
        assert!(!no_id.is_valid());

        let mut logged_out = sample_session();
        logged_out.is_logged_in = false;
        assert!(!logged_out.is_valid());
    }

    #[test]
    fn test_empty_store_is_invalid() {
        let (_dir, store) = store();
        assert!(store.load().is_none());
        assert!(!store.is_valid());
        assert!(store.bearer_token().is_none());
    }

    #[test]
    fn test_clear_then_load_returns_none() {
        let (_dir, store) = store();
        store.save(&sample_session()).unwrap();
        assert!(store.is_valid());

        store.clear().unwrap();
        assert!(store.load().is_none());
        assert!(!store.is_valid());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_dir, store) = store();
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_clear_removes_legacy_doctor_id() {
        let (_dir, store) = store();
        store.save(&sample_session()).unwrap();
        std::fs::write(store.dir.join(LEGACY_DOCTOR_ID_FILE), "12").unwrap();

        store.clear().unwrap();
        assert!(!store.dir.join(LEGACY_DOCTOR_ID_FILE).exists());
    }

    #[test]
    fn test_malformed_file_is_no_session() {
        let (_dir, store) = store();
        std::fs::create_dir_all(&store.dir).unwrap();
        std::fs::write(store.session_path(), "{not json").unwrap();

        assert!(store.load().is_none());
        assert!(!store.is_valid());
        assert!(store.bearer_token().is_none());
    }

    #[test]
    fn test_save_overwrites_whole_record() {
        let (_dir, store) = store();
        store.save(&sample_session()).unwrap();

        let mut second = sample_session();
        second.token = "tok-next".to_string();
        second.username = None;
        store.save(&second).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.token, "tok-next");
        assert_eq!(loaded.username, None);
    }

    #[test]
    fn test_bearer_token_requires_nonempty_token() {
        let (_dir, store) = store();
        let mut session = sample_session();
        session.token = String::new();
        store.save(&session).unwrap();

        // No "Bearer " with an empty credential
        assert!(store.bearer_token().is_none());
    }

    #[test]
    fn test_invalidate_clears_store() {
        let (_dir, store) = store();
        store.save(&sample_session()).unwrap();

        store.invalidate();
        assert!(store.load().is_none());
    }
}
