//! Notifier trait - best-effort live push to connected users

use async_trait::async_trait;

use crate::events::PushEvent;

/// Best-effort delivery of events to live connections.
///
/// Implementations look up the target in the presence registry at call
/// time; there is no durable retry. A `false` return means the user had
/// no reachable handle at that instant - callers treat it as a silent
/// drop, never an error.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Push an event to a user's live connection, if one exists.
    /// Returns whether the event was handed to a connection.
    async fn send_to_user(&self, user_id: &str, event: PushEvent) -> bool;

    /// Push an event to every open connection, bound or not.
    /// Returns the number of connections reached.
    async fn broadcast(&self, event: PushEvent) -> usize;
}
