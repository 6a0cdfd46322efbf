//! Message store trait - durable persistence of message records

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{DeliveryState, Message, NewMessage};
use crate::error::RelayError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, RelayError>;

/// Durable persistence of message records.
///
/// The store owns message records exclusively; the relay orchestrates but
/// never mutates state outside these operations.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persist a new message. The store assigns id and timestamp and sets
    /// the initial state to `sent`.
    async fn create(&self, draft: &NewMessage) -> StoreResult<Message>;

    /// Fetch a message by id. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Message>>;

    /// Advance a message's delivery state.
    ///
    /// Forward-only: a backward or same-state transition must leave the
    /// record untouched and return it as currently persisted. Must be
    /// atomic per record (compare-and-set, not blind overwrite).
    async fn update_state(&self, id: Uuid, state: DeliveryState) -> StoreResult<Message>;

    /// Conversation history between two users, oldest first. Used by
    /// clients reconciling after a reconnect.
    async fn find_between(&self, user_a: &str, user_b: &str) -> StoreResult<Vec<Message>>;
}
