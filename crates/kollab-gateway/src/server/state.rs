//! Gateway state
//!
//! Application state for the gateway server.

use std::sync::Arc;

use kollab_common::AppConfig;
use kollab_service::{MessageRelay, TypingRelay};

use crate::connection::PresenceRegistry;

/// Gateway application state
///
/// Holds all shared dependencies for the gateway server.
#[derive(Clone)]
pub struct GatewayState {
    /// Presence registry for live connections
    registry: Arc<PresenceRegistry>,
    /// Message relay service
    message_relay: Arc<MessageRelay>,
    /// Typing relay service
    typing_relay: Arc<TypingRelay>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl GatewayState {
    /// Create a new gateway state
    pub fn new(
        registry: Arc<PresenceRegistry>,
        message_relay: Arc<MessageRelay>,
        typing_relay: Arc<TypingRelay>,
        config: AppConfig,
    ) -> Self {
        Self {
            registry,
            message_relay,
            typing_relay,
            config: Arc::new(config),
        }
    }

    /// Get the presence registry
    pub fn registry(&self) -> &PresenceRegistry {
        &self.registry
    }

    /// Get the message relay
    pub fn message_relay(&self) -> &MessageRelay {
        &self.message_relay
    }

    /// Get the typing relay
    pub fn typing_relay(&self) -> &TypingRelay {
        &self.typing_relay
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for GatewayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayState")
            .field("registry", &self.registry)
            .field("config", &"AppConfig")
            .finish()
    }
}
