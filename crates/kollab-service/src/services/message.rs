//! Message relay service
//!
//! Accepts inbound message submissions, persists them through the store,
//! attempts the live push, and manages delivered/seen transitions.
//!
//! Persistence is authoritative; everything after a successful create is
//! best-effort. A receiver without a live handle leaves the record in
//! `sent` with no redelivery - clients reconcile via the durable store on
//! reconnect.

use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use kollab_core::{
    DeliveryState, Message, MessageStore, NewMessage, Notifier, PushEvent, RelayError, RelayResult,
};

/// Message relay service
pub struct MessageRelay {
    store: Arc<dyn MessageStore>,
    notifier: Arc<dyn Notifier>,
}

impl MessageRelay {
    /// Create a new MessageRelay
    pub fn new(store: Arc<dyn MessageStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Submit a new message.
    ///
    /// Persists with state `sent`; a store failure aborts before any push
    /// and surfaces to the submitting connection only. On success the
    /// receiver (if live) gets a `receiveMessage` push and the record
    /// advances to `delivered`; the sender (if live) gets a
    /// `messageDelivered` ack either way - it signals "accepted by the
    /// relay", not "reached the receiver".
    #[instrument(skip(self, draft), fields(sender_id = %draft.sender_id, receiver_id = %draft.receiver_id))]
    pub async fn submit(&self, draft: NewMessage) -> RelayResult<Message> {
        if draft.is_blank() {
            return Err(RelayError::EmptyContent);
        }

        let mut message = self.store.create(&draft).await?;

        let pushed = self
            .notifier
            .send_to_user(&message.receiver_id, PushEvent::ReceiveMessage(message.clone()))
            .await;

        if pushed {
            // Receiver was reachable: advance to delivered. A store
            // failure here degrades to "record stays sent" - the push
            // already happened and is not rolled back.
            match self
                .store
                .update_state(message.id, DeliveryState::Delivered)
                .await
            {
                Ok(updated) => message = updated,
                Err(e) => {
                    warn!(message_id = %message.id, error = %e, "Delivered transition failed");
                }
            }
        }

        self.notifier
            .send_to_user(&message.sender_id, PushEvent::delivered(message.id))
            .await;

        info!(
            message_id = %message.id,
            state = %message.state,
            "Message submitted"
        );

        Ok(message)
    }

    /// Mark a message as seen on behalf of `requesting_user_id`.
    ///
    /// Only the addressed receiver may do this; anyone else gets
    /// `NotReceiver` with no mutation. Idempotent when already seen. The
    /// original sender (if live) is notified; their absence is not an
    /// error.
    #[instrument(skip(self))]
    pub async fn mark_seen(
        &self,
        message_id: Uuid,
        requesting_user_id: &str,
    ) -> RelayResult<Message> {
        let message = self
            .store
            .find_by_id(message_id)
            .await?
            .ok_or(RelayError::MessageNotFound(message_id))?;

        if !message.is_receiver(requesting_user_id) {
            return Err(RelayError::NotReceiver {
                message_id,
                user_id: requesting_user_id.to_string(),
            });
        }

        let updated = self
            .store
            .update_state(message_id, DeliveryState::Seen)
            .await?;

        self.notifier
            .send_to_user(&updated.sender_id, PushEvent::seen(message_id))
            .await;

        info!(message_id = %message_id, "Message marked as seen");

        Ok(updated)
    }

    /// Conversation history between two users, oldest first
    #[instrument(skip(self))]
    pub async fn history(&self, user_a: &str, user_b: &str) -> RelayResult<Vec<Message>> {
        self.store.find_between(user_a, user_b).await
    }
}
