//! Session State & Profile Cache
//!
//! The authenticated user's record lives in an external, process-wide
//! store. The controller's only interaction with it is "replace with
//! record R" on a successful submission; the same record is mirrored to a
//! durable key-value slot.

use formwork_core::{Field, FormFields};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

/// Fixed key for the durable profile-cache slot.
pub const CACHE_KEY: &str = "user-threads";

/// The canonical account record the backend returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    #[serde(rename = "profilePic", default)]
    pub profile_pic: String,
}

impl From<&UserRecord> for FormFields {
    /// Prefill an update form from the current record. The password field
    /// starts empty ("leave unchanged").
    fn from(record: &UserRecord) -> Self {
        let mut fields = FormFields::new();
        fields.set(Field::Name, record.name.clone());
        fields.set(Field::Username, record.username.clone());
        fields.set(Field::Email, record.email.clone());
        fields.set(Field::Bio, record.bio.clone());
        fields
    }
}

/// Process-wide store of the current authenticated user.
pub trait SessionHandle: Send + Sync {
    /// Replace the stored record.
    fn replace(&self, record: UserRecord);

    /// The current record, if any.
    fn current(&self) -> Option<UserRecord>;
}

impl<T: SessionHandle + ?Sized> SessionHandle for std::sync::Arc<T> {
    fn replace(&self, record: UserRecord) {
        (**self).replace(record)
    }

    fn current(&self) -> Option<UserRecord> {
        (**self).current()
    }
}

/// In-memory session store for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySession {
    user: RwLock<Option<UserRecord>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(record: UserRecord) -> Self {
        Self {
            user: RwLock::new(Some(record)),
        }
    }
}

impl SessionHandle for InMemorySession {
    fn replace(&self, record: UserRecord) {
        *self.user.write().expect("session lock poisoned") = Some(record);
    }

    fn current(&self) -> Option<UserRecord> {
        self.user.read().expect("session lock poisoned").clone()
    }
}

/// Durable client-side key-value slot mirroring the session record.
/// Write-only from this crate's point of view.
pub trait ProfileCache: Send + Sync {
    fn store(&self, key: &str, record: &UserRecord);
}

impl<T: ProfileCache + ?Sized> ProfileCache for std::sync::Arc<T> {
    fn store(&self, key: &str, record: &UserRecord) {
        (**self).store(key, record)
    }
}

/// In-memory cache stand-in.
#[derive(Debug, Default)]
pub struct MemoryCache {
    slots: Mutex<HashMap<String, UserRecord>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<UserRecord> {
        self.slots.lock().expect("cache lock poisoned").get(key).cloned()
    }
}

impl ProfileCache for MemoryCache {
    fn store(&self, key: &str, record: &UserRecord) {
        self.slots
            .lock()
            .expect("cache lock poisoned")
            .insert(key.to_string(), record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_record_shape() {
        let record: UserRecord = serde_json::from_value(serde_json::json!({
            "_id": "1",
            "username": "jane",
            "profilePic": "https://cdn.example/p.png"
        }))
        .unwrap();

        assert_eq!(record.id, "1");
        assert_eq!(record.username, "jane");
        assert_eq!(record.profile_pic, "https://cdn.example/p.png");
        assert_eq!(record.name, "");
    }

    #[test]
    fn session_replace_and_read_back() {
        let session = InMemorySession::new();
        assert!(session.current().is_none());

        let record = UserRecord {
            id: "1".into(),
            username: "jane".into(),
            ..Default::default()
        };
        session.replace(record.clone());
        assert_eq!(session.current(), Some(record));
    }

    #[test]
    fn prefill_leaves_password_empty() {
        let record = UserRecord {
            id: "1".into(),
            name: "Jane Doe".into(),
            username: "jane".into(),
            email: "jane@x.com".into(),
            bio: "hi".into(),
            ..Default::default()
        };

        let fields = FormFields::from(&record);
        assert_eq!(fields.get(Field::Name), "Jane Doe");
        assert_eq!(fields.get(Field::Bio), "hi");
        assert_eq!(fields.get(Field::Password), "");
    }
}
