//! `localStorage` backend for the persisted session record.
//!
//! Holds only the key; the `Storage` handle is looked up on every call since
//! it is not `Send`. Outside a browser (`ssr`, native tests) every call is a
//! no-op that reports nothing stored.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser behavior. A missing `window` or a
//! storage quota error surfaces as `StoreError::Backend` so the session
//! context can refuse the transition rather than silently diverge.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use session::{SessionConfig, SessionStore, StoreError, StoredSession};

#[derive(Clone, Debug)]
pub struct BrowserStore {
    key: String,
}

impl BrowserStore {
    pub fn new(config: &SessionConfig) -> Self {
        Self { key: config.storage_key.clone() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .ok_or_else(|| StoreError::Backend("no window".to_owned()))?
        .local_storage()
        .map_err(|e| StoreError::Backend(format!("{e:?}")))?
        .ok_or_else(|| StoreError::Backend("localStorage disabled".to_owned()))
}

impl SessionStore for BrowserStore {
    fn load(&self) -> Result<Option<StoredSession>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let raw = storage()?
                .get_item(&self.key)
                .map_err(|e| StoreError::Backend(format!("{e:?}")))?;
            raw.as_deref().map(StoredSession::decode).transpose()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn save(&mut self, record: &StoredSession) -> Result<(), StoreError> {
        let raw = record.encode()?;
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .set_item(&self.key, &raw)
                .map_err(|e| StoreError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop(raw);
            Ok(())
        }
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .remove_item(&self.key)
                .map_err(|e| StoreError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}
