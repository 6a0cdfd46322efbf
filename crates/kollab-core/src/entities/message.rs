//! Message entity - a persisted direct message between two users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery state of a message.
///
/// Transitions are monotonic: `Sent -> Delivered -> Seen`. The derived
/// `Ord` encodes that ordering, so "may advance to `s`" is exactly
/// `s > current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryState {
    /// Persisted, receiver not reached.
    Sent,
    /// Pushed to the receiver's live connection at submit time.
    Delivered,
    /// Receiver explicitly acknowledged reading the message.
    Seen,
}

impl DeliveryState {
    /// String form used on the wire and in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Delivered => "delivered",
            Self::Seen => "seen",
        }
    }

    /// Numeric rank stored in the database (`SMALLINT`)
    #[must_use]
    pub const fn rank(self) -> i16 {
        match self {
            Self::Sent => 0,
            Self::Delivered => 1,
            Self::Seen => 2,
        }
    }

    /// Inverse of [`DeliveryState::rank`]
    #[must_use]
    pub const fn from_rank(rank: i16) -> Option<Self> {
        match rank {
            0 => Some(Self::Sent),
            1 => Some(Self::Delivered),
            2 => Some(Self::Seen),
            _ => None,
        }
    }

    /// Whether moving to `next` is a forward transition
    #[inline]
    #[must_use]
    pub fn can_advance_to(self, next: Self) -> bool {
        next > self
    }
}

impl std::fmt::Display for DeliveryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message entity
///
/// User identities are opaque external strings; the relay never
/// interprets them beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    pub state: DeliveryState,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Check if the receiver has acknowledged the message
    #[inline]
    pub fn is_seen(&self) -> bool {
        self.state == DeliveryState::Seen
    }

    /// Check if a user is the addressed receiver
    #[inline]
    pub fn is_receiver(&self, user_id: &str) -> bool {
        self.receiver_id == user_id
    }
}

/// Payload for creating a new message; the store assigns id, timestamp,
/// and the initial `sent` state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
}

impl NewMessage {
    /// Create a new message draft
    pub fn new(
        sender_id: impl Into<String>,
        receiver_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            content: content.into(),
            campaign_id: None,
        }
    }

    /// Attach the campaign this conversation belongs to
    pub fn with_campaign(mut self, campaign_id: impl Into<String>) -> Self {
        self.campaign_id = Some(campaign_id.into());
        self
    }

    /// Check if the content is empty after trimming
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}
