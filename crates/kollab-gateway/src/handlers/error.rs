//! Handler error types

use kollab_core::{PushEvent, RelayError};
use thiserror::Error;

/// Handler error type
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Frame parsed but its payload was unusable
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Relay operation that requires a bound identity, on an unbound handle
    #[error("Connection has not joined")]
    NotJoined,

    /// Relay-level failure
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl HandlerError {
    /// Convert into the error event pushed to the offending connection
    pub fn to_push_event(&self) -> PushEvent {
        match self {
            Self::InvalidPayload(msg) => PushEvent::error("INVALID_PAYLOAD", msg.clone()),
            Self::NotJoined => PushEvent::error("NOT_JOINED", self.to_string()),
            Self::Relay(e) => PushEvent::error(e.code(), e.to_string()),
        }
    }
}

/// Handler result type
pub type HandlerResult<T> = Result<T, HandlerError>;
