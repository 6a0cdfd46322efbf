//! Presence registry
//!
//! Authoritative mapping from user identity to the single active live
//! connection, plus the table of every open socket (bound or not) for
//! status broadcasts. DashMap gives per-key atomicity, so no caller ever
//! observes a half-updated binding.

use std::sync::Arc;

use dashmap::DashMap;
use kollab_core::PushEvent;
use tokio::sync::mpsc;

use super::Connection;

/// Registry of open connections and online users
///
/// At most one handle is recorded per user at any instant; the last
/// successful join wins.
pub struct PresenceRegistry {
    /// Every open connection by session id, including unbound handles
    connections: DashMap<String, Arc<Connection>>,

    /// User identity to active handle (set on join)
    online: DashMap<String, Arc<Connection>>,
}

impl PresenceRegistry {
    /// Create a new registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
            online: DashMap::new(),
        }
    }

    /// Create a new registry wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Track a newly opened socket
    pub fn add_connection(
        &self,
        session_id: String,
        sender: mpsc::Sender<PushEvent>,
    ) -> Arc<Connection> {
        let connection = Connection::new(session_id.clone(), sender);
        self.connections.insert(session_id.clone(), connection.clone());

        tracing::debug!(session_id = %session_id, "Connection added");

        connection
    }

    /// Forget a closed socket
    pub fn remove_connection(&self, session_id: &str) {
        if self.connections.remove(session_id).is_some() {
            tracing::debug!(session_id = %session_id, "Connection removed");
        }
    }

    /// Bind a user identity to a handle, overwriting any prior binding
    /// for that user unconditionally (last join wins).
    pub fn register(&self, user_id: &str, connection: Arc<Connection>) {
        self.online.insert(user_id.to_string(), connection);

        tracing::debug!(user_id = %user_id, "User registered");
    }

    /// Remove the binding for this handle's user, but only if the
    /// registry still maps that user to exactly this handle. A delayed
    /// disconnect for a superseded handle is a no-op and must not evict
    /// a newer connection for the same user.
    ///
    /// Returns whether an entry was actually removed.
    pub async fn unregister(&self, connection: &Arc<Connection>) -> bool {
        let Some(user_id) = connection.user_id().await else {
            return false;
        };

        let removed = self
            .online
            .remove_if(&user_id, |_, current| {
                current.session_id() == connection.session_id()
            })
            .is_some();

        if removed {
            tracing::debug!(user_id = %user_id, "User unregistered");
        }

        removed
    }

    /// Look up the active handle for a user
    pub fn lookup(&self, user_id: &str) -> Option<Arc<Connection>> {
        self.online.get(user_id).map(|r| r.clone())
    }

    /// Check if a user currently holds a live connection
    pub fn is_online(&self, user_id: &str) -> bool {
        self.online.contains_key(user_id)
    }

    /// Current online-user set
    pub fn snapshot(&self) -> Vec<String> {
        self.online.iter().map(|r| r.key().clone()).collect()
    }

    /// Push an event to a user's active handle, if any.
    /// Best-effort: a dead or saturated handle counts as not delivered.
    pub fn send_to_user(&self, user_id: &str, event: PushEvent) -> bool {
        let Some(connection) = self.lookup(user_id) else {
            return false;
        };

        let sent = connection.try_send(event);

        tracing::trace!(user_id = %user_id, sent = sent, "Event pushed to user");

        sent
    }

    /// Push an event to every open connection, bound or not.
    /// Returns the number of connections reached.
    pub fn broadcast(&self, event: PushEvent) -> usize {
        let mut sent = 0;

        for entry in self.connections.iter() {
            if entry.try_send(event.clone()) {
                sent += 1;
            }
        }

        tracing::debug!(sent = sent, "Event broadcast to all connections");

        sent
    }

    /// Number of open connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Number of online users
    pub fn online_count(&self) -> usize {
        self.online.len()
    }
}

impl Default for PresenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PresenceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresenceRegistry")
            .field("connections", &self.connections.len())
            .field("online", &self.online.len())
            .finish()
    }
}
