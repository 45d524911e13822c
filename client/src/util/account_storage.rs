//! `localStorage` backend for the account directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session record survives a reload, so the accounts it names have to as
//! well or a restored user could never sign in again. `BrowserDirectory`
//! wraps a `MemoryDirectory`, loads it once at start-up and writes the whole
//! snapshot back after every registration. Outside a browser it behaves as a
//! plain in-memory directory.

#[cfg(test)]
#[path = "account_storage_test.rs"]
mod account_storage_test;

use session::{AuthError, MemoryDirectory, Profile, Session, UserDirectory};

pub const ACCOUNTS_STORAGE_KEY: &str = "freelance_accounts";

#[derive(Debug)]
pub struct BrowserDirectory {
    key: String,
    accounts: MemoryDirectory,
}

impl BrowserDirectory {
    /// Accounts stored under `key`, or none if nothing readable is there.
    pub fn load(key: &str) -> Self {
        Self { key: key.to_owned(), accounts: read_accounts(key) }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn persist(&self) {
        let raw = match self.accounts.encode() {
            Ok(raw) => raw,
            Err(e) => {
                warn_accounts("encode", &e.to_string());
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            let written = crate::util::session_storage::storage()
                .and_then(|s| s.set_item(&self.key, &raw).map_err(|e| session::StoreError::Backend(format!("{e:?}"))));
            if let Err(e) = written {
                warn_accounts("write", &e.to_string());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        drop(raw);
    }
}

impl Default for BrowserDirectory {
    fn default() -> Self {
        Self::load(ACCOUNTS_STORAGE_KEY)
    }
}

impl UserDirectory for BrowserDirectory {
    fn verify(&self, identifier: &str, secret: &str) -> Result<Session, AuthError> {
        self.accounts.verify(identifier, secret)
    }

    /// The account stays registered for this page load even if the snapshot
    /// cannot be written.
    fn register(&mut self, profile: &Profile) -> Result<Session, AuthError> {
        let session = self.accounts.register(profile)?;
        self.persist();
        Ok(session)
    }
}

#[cfg(feature = "hydrate")]
fn read_accounts(key: &str) -> MemoryDirectory {
    let raw = crate::util::session_storage::storage()
        .and_then(|s| s.get_item(key).map_err(|e| session::StoreError::Backend(format!("{e:?}"))));
    match raw {
        Ok(Some(raw)) => MemoryDirectory::decode(&raw).unwrap_or_else(|e| {
            warn_accounts("decode", &e.to_string());
            MemoryDirectory::new()
        }),
        Ok(None) => MemoryDirectory::new(),
        Err(e) => {
            warn_accounts("read", &e.to_string());
            MemoryDirectory::new()
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn read_accounts(_key: &str) -> MemoryDirectory {
    MemoryDirectory::new()
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn warn_accounts(step: &str, error: &str) {
    #[cfg(feature = "hydrate")]
    log::warn!("stored accounts {step} failed: {error}");
}
