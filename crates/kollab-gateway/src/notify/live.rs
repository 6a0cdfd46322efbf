//! Registry-backed notifier
//!
//! Implements the `Notifier` seam over the in-process presence registry.
//! Swapping this for a distributed channel later leaves the relay
//! services untouched.

use std::sync::Arc;

use async_trait::async_trait;
use kollab_core::{Notifier, PushEvent};

use crate::connection::PresenceRegistry;

/// In-process notifier delivering events through connection channels
pub struct LiveNotifier {
    registry: Arc<PresenceRegistry>,
}

impl LiveNotifier {
    /// Create a new notifier over a registry
    pub fn new(registry: Arc<PresenceRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Notifier for LiveNotifier {
    async fn send_to_user(&self, user_id: &str, event: PushEvent) -> bool {
        self.registry.send_to_user(user_id, event)
    }

    async fn broadcast(&self, event: PushEvent) -> usize {
        self.registry.broadcast(event)
    }
}
