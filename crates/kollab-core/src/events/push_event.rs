//! Push events - server-to-client events pushed over live connections
//!
//! These are the wire frames a connected client receives. Delivery is
//! best-effort: an absent or dead handle means the event is dropped, never
//! queued for redelivery.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Message;

/// All events pushed to live connections
///
/// Serialized as `{"event": "...", "data": {...}}` with camelCase event
/// names matching the client protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum PushEvent {
    /// New message for the receiver
    ReceiveMessage(Message),
    /// Delivery ack to the sender: the relay accepted the message
    MessageDelivered(MessageIdPayload),
    /// Seen ack to the original sender
    MessageSeenUpdate(MessageIdPayload),
    /// Current online-user set, broadcast on presence change
    UpdateUserStatus(UserStatusPayload),
    /// Peer started typing
    Typing(TypingPayload),
    /// Peer stopped typing
    StopTyping(TypingPayload),
    /// Request-scoped failure, surfaced to the submitting connection only
    Error(ErrorPayload),
}

impl PushEvent {
    /// Get the wire-level event name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ReceiveMessage(_) => "receiveMessage",
            Self::MessageDelivered(_) => "messageDelivered",
            Self::MessageSeenUpdate(_) => "messageSeenUpdate",
            Self::UpdateUserStatus(_) => "updateUserStatus",
            Self::Typing(_) => "typing",
            Self::StopTyping(_) => "stopTyping",
            Self::Error(_) => "error",
        }
    }

    /// Build a delivery ack
    pub fn delivered(message_id: Uuid) -> Self {
        Self::MessageDelivered(MessageIdPayload { message_id })
    }

    /// Build a seen ack
    pub fn seen(message_id: Uuid) -> Self {
        Self::MessageSeenUpdate(MessageIdPayload { message_id })
    }

    /// Build an online-status broadcast
    pub fn user_status(online: Vec<String>) -> Self {
        Self::UpdateUserStatus(UserStatusPayload { online })
    }

    /// Build an error event
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error(ErrorPayload {
            code: code.into(),
            message: message.into(),
        })
    }
}

/// Payload carrying only a message id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageIdPayload {
    pub message_id: Uuid,
}

/// Current online-user set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusPayload {
    pub online: Vec<String>,
}

/// Typing signal forwarded to the receiver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingPayload {
    pub sender_id: String,
}

/// Request-scoped error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
}
