//! The session context: one shared cell, its mutation entry points, and the
//! subscribers that react to transitions.
//!
//! ARCHITECTURE
//! ============
//! `SessionContext` is a cheap `Arc` handle. All state sits behind a single
//! mutex, so there is exactly one writer at a time no matter how many views
//! hold a clone. Listeners are called after the lock is released; each event
//! carries the revision assigned under the lock, so a listener may read or
//! mutate the context from inside its callback.
//!
//! SUPERSESSION
//! ============
//! Login and signup run as attempts. `begin_attempt` issues a ticket and
//! `settle` applies an outcome only if no newer attempt or logout was issued
//! in between. Stale outcomes fail with [`AuthError::Superseded`] and leave
//! the state untouched. A networked directory would call the same pair
//! around its await point.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::directory::{MemoryDirectory, UserDirectory, validate_profile};
use crate::error::AuthError;
use crate::model::{Profile, Session, SessionState};
use crate::store::{NullStore, SessionStore, StoredSession};

/// Handle returned by [`SessionContext::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What caused a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    LoggedIn,
    SignedUp,
    LoggedOut,
    /// Session recovered from the store at start-up.
    Restored,
}

/// Kind of attempt being settled. Only these can start a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptKind {
    Login,
    Signup,
}

impl AttemptKind {
    #[must_use]
    pub fn transition(self) -> Transition {
        match self {
            Self::Login => Transition::LoggedIn,
            Self::Signup => Transition::SignedUp,
        }
    }
}

/// Delivered to every listener once per transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionEvent {
    /// Monotonic transition counter, starting at 1 for the first transition.
    pub revision: u64,
    pub transition: Transition,
    /// State after the transition.
    pub state: SessionState,
}

/// Ticket for an in-flight login or signup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct AttemptTicket(u64);

type Listener = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

struct Notification {
    event: SessionEvent,
    listeners: Vec<Listener>,
}

impl Notification {
    /// A panicking listener is logged and skipped; the rest still run.
    fn dispatch(self) {
        for listener in &self.listeners {
            if catch_unwind(AssertUnwindSafe(|| listener(&self.event))).is_err() {
                tracing::error!(
                    revision = self.event.revision,
                    transition = ?self.event.transition,
                    "session listener panicked"
                );
            }
        }
    }
}

struct Inner {
    state: SessionState,
    revision: u64,
    latest_attempt: u64,
    directory: Box<dyn UserDirectory>,
    store: Box<dyn SessionStore>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Inner {
    /// Swap in `next`, returning the notification to send if anything changed.
    fn commit(&mut self, next: SessionState, transition: Transition) -> Option<Notification> {
        if self.state == next {
            return None;
        }
        self.state = next;
        self.revision += 1;
        Some(Notification {
            event: SessionEvent { revision: self.revision, transition, state: self.state.clone() },
            listeners: self.listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
        })
    }
}

/// Single source of truth for who is signed in.
#[derive(Clone)]
pub struct SessionContext {
    inner: Arc<Mutex<Inner>>,
}

impl SessionContext {
    #[must_use]
    pub fn new(directory: impl UserDirectory + 'static, store: impl SessionStore + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: SessionState::Anonymous,
                revision: 0,
                latest_attempt: 0,
                directory: Box::new(directory),
                store: Box::new(store),
                listeners: Vec::new(),
                next_subscription: 0,
            })),
        }
    }

    /// Empty in-memory directory, nothing persisted.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryDirectory::new(), NullStore)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // READS
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        self.lock().state.session().cloned()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock().state.is_authenticated()
    }

    /// Number of transitions so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.lock().revision
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Register a listener called once per transition.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        inner.next_subscription += 1;
        let id = SubscriptionId(inner.next_subscription);
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(sid, _)| *sid != id);
        inner.listeners.len() != before
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Sign in with a username or email and a secret.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidInput`] for an empty identifier or secret.
    /// - [`AuthError::InvalidCredentials`] when the directory has no match.
    /// - [`AuthError::Unavailable`] when the session cannot be persisted.
    /// - [`AuthError::Superseded`] when another attempt started meanwhile.
    pub fn login(&self, identifier: &str, secret: &str) -> Result<Session, AuthError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(AuthError::required("identifier"));
        }
        if secret.is_empty() {
            return Err(AuthError::required("password"));
        }
        let ticket = self.begin_attempt();
        let outcome = self.lock().directory.verify(identifier, secret);
        self.settle(ticket, outcome, AttemptKind::Login)
    }

    /// Register a new account and sign in as it.
    ///
    /// The account stays registered even if activating the session fails
    /// afterwards.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidInput`] for a missing field or malformed email.
    /// - [`AuthError::AlreadyExists`] when the username or email is taken.
    /// - [`AuthError::Unavailable`] when the session cannot be persisted.
    /// - [`AuthError::Superseded`] when another attempt started meanwhile.
    pub fn signup(&self, profile: &Profile) -> Result<Session, AuthError> {
        let profile = validate_profile(profile)?;
        let ticket = self.begin_attempt();
        let outcome = self.lock().directory.register(&profile);
        self.settle(ticket, outcome, AttemptKind::Signup)
    }

    /// Clear the session. Calling this while anonymous changes nothing
    /// observable, but still cancels any in-flight attempt.
    pub fn logout(&self) {
        let notification = {
            let mut inner = self.lock();
            inner.latest_attempt += 1;
            let Some(previous) = inner.state.session().map(|s| s.username.clone()) else {
                return;
            };
            if let Err(e) = inner.store.clear() {
                tracing::warn!(error = %e, "failed to clear stored session");
            }
            tracing::info!(username = %previous, "session ended");
            inner.commit(SessionState::Anonymous, Transition::LoggedOut)
        };
        if let Some(notification) = notification {
            notification.dispatch();
        }
    }

    /// Adopt the session left in the store by a previous page load.
    ///
    /// Does nothing if a session is already active. A store read failure is
    /// logged and leaves the context anonymous.
    pub fn restore(&self) -> Option<Session> {
        let (session, notification) = {
            let mut inner = self.lock();
            if let Some(active) = inner.state.session() {
                return Some(active.clone());
            }
            let record = match inner.store.load() {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(error = %e, "stored session unreadable; starting anonymous");
                    return None;
                }
            };
            let session = record.and_then(StoredSession::into_session)?;
            tracing::info!(username = %session.username, "session restored");
            let notification = inner.commit(SessionState::Authenticated(session.clone()), Transition::Restored);
            (session, notification)
        };
        if let Some(notification) = notification {
            notification.dispatch();
        }
        Some(session)
    }

    // =========================================================================
    // ATTEMPTS
    // =========================================================================

    /// Start an attempt, superseding any attempt still in flight.
    pub fn begin_attempt(&self) -> AttemptTicket {
        let mut inner = self.lock();
        inner.latest_attempt += 1;
        AttemptTicket(inner.latest_attempt)
    }

    /// Apply the outcome of an attempt.
    ///
    /// A ticket settles at most once; settling it again, or after a newer
    /// attempt or logout, fails with [`AuthError::Superseded`]. The session
    /// is checked again here since any directory can produce it.
    ///
    /// # Errors
    ///
    /// The outcome's own error, [`AuthError::InvalidInput`] for a session
    /// with a blank username or email, [`AuthError::Unavailable`] if the
    /// session cannot be persisted, or [`AuthError::Superseded`].
    pub fn settle(
        &self,
        ticket: AttemptTicket,
        outcome: Result<Session, AuthError>,
        kind: AttemptKind,
    ) -> Result<Session, AuthError> {
        let transition = kind.transition();
        let (session, notification) = {
            let mut inner = self.lock();
            if ticket.0 != inner.latest_attempt {
                tracing::debug!(ticket = ticket.0, latest = inner.latest_attempt, "discarding stale attempt");
                return Err(AuthError::Superseded);
            }
            inner.latest_attempt += 1;
            let session = outcome?;
            check_session(&session)?;
            inner
                .store
                .save(&StoredSession::from(&session))
                .map_err(|e| {
                    tracing::warn!(error = %e, "failed to persist session");
                    AuthError::from(e)
                })?;
            tracing::info!(username = %session.username, ?transition, "session started");
            let notification = inner.commit(SessionState::Authenticated(session.clone()), transition);
            (session, notification)
        };
        if let Some(notification) = notification {
            notification.dispatch();
        }
        Ok(session)
    }
}

fn check_session(session: &Session) -> Result<(), AuthError> {
    if session.username.trim().is_empty() {
        tracing::warn!("directory returned a session without a username");
        return Err(AuthError::required("username"));
    }
    if session.email.trim().is_empty() {
        tracing::warn!(username = %session.username, "directory returned a session without an email");
        return Err(AuthError::required("email"));
    }
    Ok(())
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("SessionContext")
            .field("state", &inner.state)
            .field("revision", &inner.revision)
            .field("listeners", &inner.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
