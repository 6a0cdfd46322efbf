//! Client event frames
//!
//! All inbound frames are JSON of the form `{"event": "...", "data": ...}`
//! with camelCase event names.

use kollab_core::events::MessageIdPayload;
use kollab_core::NewMessage;
use serde::{Deserialize, Serialize};

/// Events a client may send over its connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Claim a user identity for this connection
    Join(JoinPayload),
    /// Submit a new message
    SendMessage(NewMessage),
    /// Acknowledge reading a message (identity taken from the handle)
    MarkMessageAsSeen(MessageIdPayload),
    /// Started typing to a peer
    Typing(TypingTarget),
    /// Stopped typing to a peer
    StopTyping(TypingTarget),
}

impl ClientEvent {
    /// Get the wire-level event name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Join(_) => "join",
            Self::SendMessage(_) => "sendMessage",
            Self::MarkMessageAsSeen(_) => "markMessageAsSeen",
            Self::Typing(_) => "typing",
            Self::StopTyping(_) => "stopTyping",
        }
    }

    /// Parse a frame from its JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Join payload: the identity this connection claims.
///
/// The identity verifier in front of the gateway guarantees the claim is
/// legitimate before the frame reaches us; the relay trusts it as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinPayload {
    pub user_id: String,
}

/// Typing signal addressing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingTarget {
    pub sender_id: String,
    pub receiver_id: String,
}
