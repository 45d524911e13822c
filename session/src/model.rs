//! Session value types.

use serde::{Deserialize, Serialize};

/// The signed-in user as seen by views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display name.
    pub username: String,
    /// Normalised email address.
    pub email: String,
}

impl Session {
    /// Build a session, rejecting an empty username or email.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Option<Self> {
        let username = username.into();
        let email = email.into();
        if username.trim().is_empty() || email.trim().is_empty() {
            return None;
        }
        Some(Self { username, email })
    }

    /// A present session is always authenticated.
    #[must_use]
    pub fn authenticated(&self) -> bool {
        true
    }
}

/// The two states of the session machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(session) => Some(session),
        }
    }
}

impl From<Option<Session>> for SessionState {
    fn from(session: Option<Session>) -> Self {
        session.map_or(Self::Anonymous, Self::Authenticated)
    }
}

/// Signup form payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub secret: String,
}

impl Profile {
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { username: username.into(), email: email.into(), secret: secret.into() }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
