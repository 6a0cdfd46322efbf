//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the messages table
///
/// `state` holds the delivery-state rank (0 = sent, 1 = delivered,
/// 2 = seen) so the forward-only transition check is a numeric compare
/// in SQL.
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: Uuid,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub campaign_id: Option<String>,
    pub state: i16,
    pub created_at: DateTime<Utc>,
}
