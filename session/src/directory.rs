//! Account lookup for login and signup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no account service, so the default directory lives in
//! memory. A browser host keeps accounts across page loads by writing
//! [`MemoryDirectory::encode`] next to the session record and reading it
//! back with [`MemoryDirectory::decode`]. The [`UserDirectory`] trait is the
//! seam a networked implementation would slot into.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, StoreError};
use crate::model::{Profile, Session};

/// Account source consulted by the session context.
pub trait UserDirectory: Send {
    /// Resolve an identifier (username or email) and secret to a session.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] when no account matches.
    fn verify(&self, identifier: &str, secret: &str) -> Result<Session, AuthError>;

    /// Create an account from an already validated profile.
    ///
    /// # Errors
    ///
    /// [`AuthError::AlreadyExists`] when the username or email is taken.
    fn register(&mut self, profile: &Profile) -> Result<Session, AuthError>;
}

/// Trim and lowercase an email, requiring exactly one `@` with both sides
/// non-empty.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let mut parts = normalized.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Some(normalized),
        _ => None,
    }
}

/// Check required signup fields and return the profile with trimmed username
/// and normalised email.
///
/// # Errors
///
/// [`AuthError::InvalidInput`] naming the first offending field.
pub fn validate_profile(profile: &Profile) -> Result<Profile, AuthError> {
    let username = profile.username.trim();
    if username.is_empty() {
        return Err(AuthError::required("username"));
    }
    if username.contains('@') {
        return Err(AuthError::InvalidInput { field: "username", reason: "must not contain '@'" });
    }
    if profile.email.trim().is_empty() {
        return Err(AuthError::required("email"));
    }
    let email = normalize_email(&profile.email)
        .ok_or(AuthError::InvalidInput { field: "email", reason: "is malformed" })?;
    if profile.secret.is_empty() {
        return Err(AuthError::required("password"));
    }
    Ok(Profile { username: username.to_owned(), email, secret: profile.secret.clone() })
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct UserRecord {
    username: String,
    email: String,
    secret: String,
}

impl UserRecord {
    fn session(&self) -> Session {
        Session { username: self.username.clone(), email: self.email.clone() }
    }
}

/// In-memory accounts keyed by lowercased username, with an email index.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    users: HashMap<String, UserRecord>,
    by_email: HashMap<String, String>,
}

impl MemoryDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Encode every account as a JSON array, ordered by username.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Codec`] if serialization fails.
    pub fn encode(&self) -> Result<String, StoreError> {
        let mut records: Vec<&UserRecord> = self.users.values().collect();
        records.sort_by(|a, b| a.username.to_lowercase().cmp(&b.username.to_lowercase()));
        Ok(serde_json::to_string(&records)?)
    }

    /// Rebuild a directory from [`MemoryDirectory::encode`] output.
    ///
    /// Records that would not pass signup validation, or that collide with
    /// an earlier record, are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Codec`] when `raw` is not an account array.
    pub fn decode(raw: &str) -> Result<Self, StoreError> {
        let records: Vec<UserRecord> = serde_json::from_str(raw)?;
        let mut directory = Self::new();
        for record in records {
            let profile = Profile::new(record.username, record.email, record.secret);
            let Ok(profile) = validate_profile(&profile) else {
                tracing::warn!(username = %profile.username, "skipping invalid stored account");
                continue;
            };
            if let Err(e) = directory.register(&profile) {
                tracing::warn!(error = %e, "skipping duplicate stored account");
            }
        }
        Ok(directory)
    }

    fn find(&self, identifier: &str) -> Option<&UserRecord> {
        let identifier = identifier.trim();
        if identifier.contains('@') {
            let email = normalize_email(identifier)?;
            let key = self.by_email.get(&email)?;
            self.users.get(key)
        } else {
            self.users.get(&identifier.to_lowercase())
        }
    }
}

impl UserDirectory for MemoryDirectory {
    fn verify(&self, identifier: &str, secret: &str) -> Result<Session, AuthError> {
        match self.find(identifier) {
            Some(record) if record.secret == secret => Ok(record.session()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    fn register(&mut self, profile: &Profile) -> Result<Session, AuthError> {
        let key = profile.username.to_lowercase();
        if self.users.contains_key(&key) {
            return Err(AuthError::AlreadyExists { identifier: profile.username.clone() });
        }
        if self.by_email.contains_key(&profile.email) {
            return Err(AuthError::AlreadyExists { identifier: profile.email.clone() });
        }
        let record = UserRecord {
            username: profile.username.clone(),
            email: profile.email.clone(),
            secret: profile.secret.clone(),
        };
        let session = record.session();
        self.by_email.insert(record.email.clone(), key.clone());
        self.users.insert(key, record);
        Ok(session)
    }
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
