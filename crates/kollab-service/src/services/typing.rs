//! Typing relay service
//!
//! Stateless ephemeral signal forwarding: no persistence, no error when
//! the receiver is absent, no ordering guarantee relative to chat
//! messages.

use std::sync::Arc;

use tracing::{instrument, trace};

use kollab_core::{events::TypingPayload, Notifier, PushEvent};

/// Kind of typing signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingKind {
    Typing,
    StopTyping,
}

impl TypingKind {
    /// Wire-level event name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::StopTyping => "stopTyping",
        }
    }
}

impl std::fmt::Display for TypingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typing relay service
pub struct TypingRelay {
    notifier: Arc<dyn Notifier>,
}

impl TypingRelay {
    /// Create a new TypingRelay
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Forward a typing signal to the receiver's live connection.
    /// Returns whether the receiver was reachable; an absent receiver is
    /// a silent drop, never an error.
    #[instrument(skip(self))]
    pub async fn signal(&self, kind: TypingKind, sender_id: &str, receiver_id: &str) -> bool {
        let payload = TypingPayload {
            sender_id: sender_id.to_string(),
        };
        let event = match kind {
            TypingKind::Typing => PushEvent::Typing(payload),
            TypingKind::StopTyping => PushEvent::StopTyping(payload),
        };

        let forwarded = self.notifier.send_to_user(receiver_id, event).await;

        trace!(
            kind = %kind,
            sender_id = %sender_id,
            receiver_id = %receiver_id,
            forwarded = forwarded,
            "Typing signal"
        );

        forwarded
    }
}
