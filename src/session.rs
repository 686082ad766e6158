//! Signed-in user session, passed explicitly to whoever needs identity data.
//!
//! The dashboard historically read the token, role, and employee id straight
//! out of browser storage wherever it needed them. Here the session is an
//! explicit [`SessionContext`] handed to collaborators, and persistence goes
//! through the [`SessionStore`] trait so the storage backend stays swappable.

use std::str::FromStr;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::UnknownStatus;

/// Result alias for session store operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Error raised by session stores.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The persisted session could not be encoded or decoded.
    #[error("session serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The underlying storage rejected the operation.
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}

/// Access level attached to a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Farm manager: full administrative access.
    Manager,
    /// Veterinarian: medical and vaccination screens.
    Veterinarian,
    /// Caretaker: assigned pens only.
    Caretaker,
}

impl UserRole {
    /// Wire code of this role.
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Manager => "MANAGER",
            UserRole::Veterinarian => "VETERINARIAN",
            UserRole::Caretaker => "CARETAKER",
        }
    }
}

impl FromStr for UserRole {
    type Err = UnknownStatus;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "MANAGER" => Ok(UserRole::Manager),
            "VETERINARIAN" => Ok(UserRole::Veterinarian),
            "CARETAKER" => Ok(UserRole::Caretaker),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

/// Identity data established at sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    /// Bearer token attached to backend requests.
    pub token: String,
    /// Role driving route guards and visible screens.
    pub role: UserRole,
    /// Identifier of the signed-in employee.
    pub employee_id: String,
}

impl SessionContext {
    /// Encodes the session as the JSON blob the store persists.
    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a session from its persisted JSON form.
    pub fn from_json(raw: &str) -> SessionResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Persistence seam for the active session.
pub trait SessionStore {
    /// Persists `session`, replacing any previous one.
    fn store(&self, session: &SessionContext) -> SessionResult<()>;
    /// Loads the active session, if any.
    fn load(&self) -> SessionResult<Option<SessionContext>>;
    /// Drops the active session (sign-out).
    fn clear(&self) -> SessionResult<()>;
}

/// Process-local store used by tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    current: Mutex<Option<String>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> SessionResult<std::sync::MutexGuard<'_, Option<String>>> {
        self.current
            .lock()
            .map_err(|_| SessionError::Unavailable("session store poisoned".into()))
    }
}

impl SessionStore for InMemorySessionStore {
    fn store(&self, session: &SessionContext) -> SessionResult<()> {
        let encoded = session.to_json()?;
        *self.slot()? = Some(encoded);
        debug!(employee_id = %session.employee_id, role = %session.role.as_str(), "session stored");
        Ok(())
    }

    fn load(&self) -> SessionResult<Option<SessionContext>> {
        let slot = self.slot()?;
        match slot.as_deref() {
            Some(raw) => Ok(Some(SessionContext::from_json(raw)?)),
            None => Ok(None),
        }
    }

    fn clear(&self) -> SessionResult<()> {
        *self.slot()? = None;
        debug!("session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_session() -> SessionContext {
        SessionContext {
            token: "eyJhbGciOi.fake.token".into(),
            role: UserRole::Manager,
            employee_id: "emp-42".into(),
        }
    }

    #[test]
    fn store_load_clear_round_trip() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.store(&manager_session()).unwrap();
        assert_eq!(store.load().unwrap(), Some(manager_session()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn persisted_form_uses_camel_case_keys() {
        let json = manager_session().to_json().unwrap();
        assert!(json.contains("\"employeeId\":\"emp-42\""));
        assert!(json.contains("\"role\":\"MANAGER\""));
        assert_eq!(SessionContext::from_json(&json).unwrap(), manager_session());
    }

    #[test]
    fn malformed_blob_is_a_serialization_error() {
        let err = SessionContext::from_json("{not json").unwrap_err();
        assert!(matches!(err, SessionError::Serialization(_)));
    }

    #[test]
    fn role_codes_round_trip() {
        for role in [UserRole::Manager, UserRole::Veterinarian, UserRole::Caretaker] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("ADMIN".parse::<UserRole>().is_err());
    }
}
