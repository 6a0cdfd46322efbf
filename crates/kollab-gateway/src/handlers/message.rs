//! Message event handlers

use std::sync::Arc;

use kollab_core::NewMessage;
use uuid::Uuid;

use super::{HandlerError, HandlerResult};
use crate::connection::Connection;
use crate::server::GatewayState;

/// Handles sendMessage and markMessageAsSeen
pub struct MessageHandler;

impl MessageHandler {
    /// Submit a message through the relay
    pub async fn send(state: &GatewayState, draft: NewMessage) -> HandlerResult<()> {
        state.message_relay().submit(draft).await?;
        Ok(())
    }

    /// Mark a message as seen on behalf of this handle's bound identity
    pub async fn mark_seen(
        state: &GatewayState,
        connection: &Arc<Connection>,
        message_id: Uuid,
    ) -> HandlerResult<()> {
        let user_id = connection
            .user_id()
            .await
            .ok_or(HandlerError::NotJoined)?;

        state.message_relay().mark_seen(message_id, &user_id).await?;
        Ok(())
    }
}
