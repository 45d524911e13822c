//! Session context shared by the site's navigation and offer views.
//!
//! This crate owns the single logical user session: who is signed in, how
//! they got there, and who needs to hear about it when that changes. It has
//! no browser dependency; the `client` crate adapts it to Leptos signals and
//! `localStorage`.
//!
//! ARCHITECTURE
//! ============
//! - [`model`]: `Session`, `SessionState`, signup `Profile`.
//! - [`directory`]: account lookup behind the [`UserDirectory`] seam.
//! - [`store`]: persisted record behind the [`SessionStore`] seam.
//! - [`context`]: the [`SessionContext`] handle with its subscriber registry.

pub mod context;
pub mod directory;
pub mod error;
pub mod model;
pub mod store;

pub use context::{AttemptKind, AttemptTicket, SessionContext, SessionEvent, SubscriptionId, Transition};
pub use directory::{MemoryDirectory, UserDirectory, normalize_email};
pub use error::{AuthError, StoreError};
pub use model::{Profile, Session, SessionState};
pub use store::{DEFAULT_STORAGE_KEY, MemoryStore, NullStore, SessionConfig, SessionStore, StoredSession};
