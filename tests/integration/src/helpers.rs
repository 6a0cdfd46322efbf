//! Test helpers for gateway integration tests
//!
//! Builds a full `GatewayState` over an in-memory store and a real
//! `PresenceRegistry`, plus a simulated client whose frames run through
//! the same parsing and dispatch path as a live socket.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use kollab_common::{AppConfig, AppSettings, CorsConfig, DatabaseConfig, ServerConfig};
use kollab_core::{
    DeliveryState, Message, MessageStore, NewMessage, Notifier, PushEvent, RelayError, StoreResult,
};
use kollab_gateway::connection::Connection;
use kollab_gateway::handlers::{EventRouter, HandlerError, LifecycleHandler};
use kollab_gateway::notify::LiveNotifier;
use kollab_gateway::protocol::ClientEvent;
use kollab_gateway::server::GatewayState;
use kollab_service::{MessageRelay, TypingRelay};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Outgoing-event buffer for simulated clients
const TEST_BUFFER_SIZE: usize = 32;

/// In-memory message store.
///
/// Insertion order stands in for `created_at` ordering, which holds
/// because creation timestamps are taken at insert time.
#[derive(Default)]
pub struct MemoryMessageStore {
    messages: Mutex<Vec<Message>>,
}

impl MemoryMessageStore {
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Current state of a stored message
    pub fn state_of(&self, id: Uuid) -> Option<DeliveryState> {
        self.messages
            .lock()
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.state)
    }

    /// Number of stored messages
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn create(&self, draft: &NewMessage) -> StoreResult<Message> {
        let message = Message {
            id: Uuid::new_v4(),
            sender_id: draft.sender_id.clone(),
            receiver_id: draft.receiver_id.clone(),
            content: draft.content.clone(),
            campaign_id: draft.campaign_id.clone(),
            state: DeliveryState::Sent,
            created_at: Utc::now(),
        };
        self.messages.lock().push(message.clone());
        Ok(message)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Message>> {
        Ok(self.messages.lock().iter().find(|m| m.id == id).cloned())
    }

    async fn update_state(&self, id: Uuid, state: DeliveryState) -> StoreResult<Message> {
        let mut messages = self.messages.lock();
        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(RelayError::MessageNotFound(id))?;
        if message.state.can_advance_to(state) {
            message.state = state;
        }
        Ok(message.clone())
    }

    async fn find_between(&self, user_a: &str, user_b: &str) -> StoreResult<Vec<Message>> {
        Ok(self
            .messages
            .lock()
            .iter()
            .filter(|m| {
                (m.sender_id == user_a && m.receiver_id == user_b)
                    || (m.sender_id == user_b && m.receiver_id == user_a)
            })
            .cloned()
            .collect())
    }
}

/// Configuration for tests; never touches the environment
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "kollab-relay-test".to_string(),
            env: kollab_common::Environment::Development,
        },
        gateway: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    }
}

/// Build a gateway state over an in-memory store.
///
/// Returns the store alongside so tests can assert on persisted state.
pub fn build_state() -> (GatewayState, Arc<MemoryMessageStore>) {
    let store = MemoryMessageStore::new_shared();
    let registry = kollab_gateway::connection::PresenceRegistry::new_shared();
    let notifier: Arc<dyn Notifier> = Arc::new(LiveNotifier::new(registry.clone()));

    let message_relay = Arc::new(MessageRelay::new(store.clone(), notifier.clone()));
    let typing_relay = Arc::new(TypingRelay::new(notifier));

    let state = GatewayState::new(registry, message_relay, typing_relay, test_config());

    (state, store)
}

/// A simulated connected client.
///
/// Frames go through `ClientEvent::from_json` and `EventRouter::dispatch`
/// exactly as they would from a live socket; pushed events land in the
/// client's channel.
pub struct TestClient {
    state: GatewayState,
    connection: Arc<Connection>,
    rx: mpsc::Receiver<PushEvent>,
}

impl TestClient {
    /// Open a new simulated connection against the gateway
    pub fn connect(state: &GatewayState) -> Self {
        let session_id = Uuid::new_v4().to_string();
        let (tx, rx) = mpsc::channel(TEST_BUFFER_SIZE);
        let connection = state.registry().add_connection(session_id, tx);

        Self {
            state: state.clone(),
            connection,
            rx,
        }
    }

    /// The underlying connection handle
    pub fn connection(&self) -> &Arc<Connection> {
        &self.connection
    }

    /// Send a raw JSON frame through the full parse-and-dispatch path
    pub async fn send_frame(&self, json: &str) -> Result<(), HandlerError> {
        let event = ClientEvent::from_json(json)
            .map_err(|e| HandlerError::InvalidPayload(e.to_string()))?;
        EventRouter::dispatch(&self.state, &self.connection, event).await
    }

    /// Claim an identity on this connection
    pub async fn join(&self, user_id: &str) -> Result<(), HandlerError> {
        let frame = serde_json::json!({
            "event": "join",
            "data": { "userId": user_id },
        });
        self.send_frame(&frame.to_string()).await
    }

    /// Submit a message
    pub async fn send_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        content: &str,
    ) -> Result<(), HandlerError> {
        let frame = serde_json::json!({
            "event": "sendMessage",
            "data": {
                "senderId": sender_id,
                "receiverId": receiver_id,
                "content": content,
            },
        });
        self.send_frame(&frame.to_string()).await
    }

    /// Acknowledge reading a message
    pub async fn mark_seen(&self, message_id: Uuid) -> Result<(), HandlerError> {
        let frame = serde_json::json!({
            "event": "markMessageAsSeen",
            "data": { "messageId": message_id },
        });
        self.send_frame(&frame.to_string()).await
    }

    /// Send a typing signal
    pub async fn typing(&self, sender_id: &str, receiver_id: &str) -> Result<(), HandlerError> {
        let frame = serde_json::json!({
            "event": "typing",
            "data": { "senderId": sender_id, "receiverId": receiver_id },
        });
        self.send_frame(&frame.to_string()).await
    }

    /// Send a stop-typing signal
    pub async fn stop_typing(
        &self,
        sender_id: &str,
        receiver_id: &str,
    ) -> Result<(), HandlerError> {
        let frame = serde_json::json!({
            "event": "stopTyping",
            "data": { "senderId": sender_id, "receiverId": receiver_id },
        });
        self.send_frame(&frame.to_string()).await
    }

    /// Wait for the next pushed event, failing after a short timeout
    pub async fn recv(&mut self) -> PushEvent {
        tokio::time::timeout(Duration::from_secs(1), self.rx.recv())
            .await
            .expect("timed out waiting for pushed event")
            .expect("connection channel closed")
    }

    /// Take an already-queued event without waiting
    pub fn try_recv(&mut self) -> Option<PushEvent> {
        self.rx.try_recv().ok()
    }

    /// Drain every queued event
    pub fn drain(&mut self) -> Vec<PushEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Simulate the socket closing: lifecycle cleanup plus removal
    pub async fn disconnect(self) {
        LifecycleHandler::disconnect(&self.state, &self.connection).await;
        self.state
            .registry()
            .remove_connection(self.connection.session_id());
    }
}
