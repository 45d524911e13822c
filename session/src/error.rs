//! Error taxonomy for session operations.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned to the caller that started the operation. The
//! context never changes state on an error path, so callers only need to
//! render the message and let the user retry.

/// Failure of a login, signup, or settle call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A required field was empty or malformed.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: &'static str },
    /// Identifier/secret pair did not match any account.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Signup collided with an existing username or email.
    #[error("account already exists: {identifier}")]
    AlreadyExists { identifier: String },
    /// The backing store could not be read or written.
    #[error("session service unavailable: {0}")]
    Unavailable(String),
    /// A newer login, signup, or logout was issued before this one settled.
    #[error("superseded by a newer request")]
    Superseded,
}

impl AuthError {
    pub(crate) fn required(field: &'static str) -> Self {
        Self::InvalidInput { field, reason: "is required" }
    }
}

/// Failure of the persisted session record.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session record codec: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("session storage backend: {0}")]
    Backend(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        Self::Unavailable(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
