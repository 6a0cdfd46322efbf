//! Individual WebSocket connection
//!
//! Represents one live transport session. Created when the socket opens,
//! destroyed when it closes; never persisted. The bound user identity is
//! set only after a successful join.

use std::sync::Arc;
use std::time::Instant;

use kollab_core::PushEvent;
use tokio::sync::{mpsc, RwLock};

/// A single live connection handle
pub struct Connection {
    /// Opaque handle id, unique per transport session
    session_id: String,

    /// Bound user identity (None until join)
    user_id: RwLock<Option<String>>,

    /// Channel to the socket's send task
    sender: mpsc::Sender<PushEvent>,

    /// Connection creation time
    created_at: Instant,
}

impl Connection {
    /// Create a new connection handle
    pub fn new(session_id: String, sender: mpsc::Sender<PushEvent>) -> Arc<Self> {
        Arc::new(Self {
            session_id,
            user_id: RwLock::new(None),
            sender,
            created_at: Instant::now(),
        })
    }

    /// Get the handle id
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Get the bound user identity, if joined
    pub async fn user_id(&self) -> Option<String> {
        self.user_id.read().await.clone()
    }

    /// Bind a user identity (on join)
    pub async fn set_user_id(&self, user_id: String) {
        *self.user_id.write().await = Some(user_id);
    }

    /// Check if this handle has a bound identity
    pub async fn is_bound(&self) -> bool {
        self.user_id.read().await.is_some()
    }

    /// Queue an event for this connection without blocking.
    /// Returns false when the socket is gone or its buffer is full -
    /// callers treat that as "not delivered".
    pub fn try_send(&self, event: PushEvent) -> bool {
        self.sender.try_send(event).is_ok()
    }

    /// Queue an event, waiting for buffer space
    pub async fn send(
        &self,
        event: PushEvent,
    ) -> Result<(), mpsc::error::SendError<PushEvent>> {
        self.sender.send(event).await
    }

    /// Check if the socket's send channel is closed
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Get connection age
    pub fn age(&self) -> std::time::Duration {
        self.created_at.elapsed()
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("session_id", &self.session_id)
            .field("created_at", &self.created_at)
            .finish()
    }
}
