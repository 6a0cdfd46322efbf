//! Relay errors - error types for relay operations
//!
//! Every failure here is scoped to the request that triggered it; nothing
//! in this taxonomy is fatal to the process. An unreachable receiver is
//! not an error at all - the push is silently dropped.

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by relay operations
#[derive(Debug, Error)]
pub enum RelayError {
    /// Store unavailable or write rejected; submit aborts before any push
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// markSeen on an unknown message id
    #[error("Message not found: {0}")]
    MessageNotFound(Uuid),

    /// markSeen by someone other than the addressed receiver
    #[error("User {user_id} is not the receiver of message {message_id}")]
    NotReceiver { message_id: Uuid, user_id: String },

    /// Submission with blank content
    #[error("Message content must not be empty")]
    EmptyContent,
}

impl RelayError {
    /// Error code string for wire-level error events
    pub fn code(&self) -> &'static str {
        match self {
            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::NotReceiver { .. } => "NOT_RECEIVER",
            Self::EmptyContent => "EMPTY_CONTENT",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MessageNotFound(_))
    }

    /// Check if this is an authorization error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::NotReceiver { .. })
    }
}

/// Result type for relay operations
pub type RelayResult<T> = Result<T, RelayError>;
