//! Reactive mirror of the session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar and offers page branch on "is someone signed in". They read this
//! snapshot from an `RwSignal<AuthState>` that the app keeps current through a
//! `SessionContext` subscription, so they re-render on every transition.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{Session, SessionContext, SessionEvent};

/// Snapshot of the session plus the revision it was taken at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub revision: u64,
}

impl AuthState {
    /// Read the context's current state.
    pub fn from_context(context: &SessionContext) -> Self {
        Self { session: context.current_session(), revision: context.revision() }
    }

    /// Fold a transition event in, ignoring events older than what we have.
    pub fn apply(&mut self, event: &SessionEvent) {
        if event.revision <= self.revision {
            return;
        }
        self.revision = event.revision;
        self.session = event.state.session().cloned();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn username(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.username.clone())
            .unwrap_or_default()
    }

    pub fn email(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.email.clone())
            .unwrap_or_default()
    }
}
