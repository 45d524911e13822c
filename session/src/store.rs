//! Persisted session record.
//!
//! DESIGN
//! ======
//! The record is a flat JSON object under one key so any key-value backend
//! (browser `localStorage`, a test slot) can hold it as a string. The
//! context writes it before committing a login and clears it on logout.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::Session;

pub const DEFAULT_STORAGE_KEY: &str = "freelance_session";

/// Settings shared by store backends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Key the record is written under.
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned() }
    }
}

/// Wire shape of the persisted record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub username: String,
    pub email: String,
    pub authenticated: bool,
}

impl StoredSession {
    /// Encode as the string stored under the storage key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Codec`] if serialization fails.
    pub fn encode(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a stored string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Codec`] for anything that is not a record.
    pub fn decode(raw: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The session this record describes, if it is authenticated and complete.
    #[must_use]
    pub fn into_session(self) -> Option<Session> {
        if !self.authenticated {
            return None;
        }
        Session::new(self.username, self.email)
    }
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> Self {
        Self { username: session.username.clone(), email: session.email.clone(), authenticated: true }
    }
}

/// Backend holding the persisted record.
pub trait SessionStore: Send {
    /// Read the record, `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Backend or decode failure.
    fn load(&self) -> Result<Option<StoredSession>, StoreError>;

    /// Replace the record.
    ///
    /// # Errors
    ///
    /// Backend or encode failure.
    fn save(&mut self, record: &StoredSession) -> Result<(), StoreError>;

    /// Remove the record.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Store that keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStore;

impl SessionStore for NullStore {
    fn load(&self) -> Result<Option<StoredSession>, StoreError> {
        Ok(None)
    }

    fn save(&mut self, _record: &StoredSession) -> Result<(), StoreError> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// In-process slot holding the encoded record.
///
/// Clones share the same slot, so a caller can keep a handle after moving
/// one into a context.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with a raw string, as a previous page load would have.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(raw.into()))) }
    }

    /// Current raw contents of the slot.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<StoredSession>, StoreError> {
        self.raw().as_deref().map(StoredSession::decode).transpose()
    }

    fn save(&mut self, record: &StoredSession) -> Result<(), StoreError> {
        let raw = record.encode()?;
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
