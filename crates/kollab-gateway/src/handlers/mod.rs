//! Client event handlers
//!
//! Routes parsed client frames to the lifecycle, message, and typing
//! handlers.

mod error;
mod lifecycle;
mod message;
mod typing;

pub use error::{HandlerError, HandlerResult};
pub use lifecycle::LifecycleHandler;
pub use message::MessageHandler;
pub use typing::TypingHandler;

use std::sync::Arc;

use crate::connection::Connection;
use crate::protocol::ClientEvent;
use crate::server::GatewayState;

/// Dispatch incoming client events to the appropriate handler
pub struct EventRouter;

impl EventRouter {
    /// Handle an incoming client event
    pub async fn dispatch(
        state: &GatewayState,
        connection: &Arc<Connection>,
        event: ClientEvent,
    ) -> HandlerResult<()> {
        tracing::trace!(
            session_id = %connection.session_id(),
            event = event.event_type(),
            "Dispatching client event"
        );

        match event {
            ClientEvent::Join(payload) => {
                LifecycleHandler::join(state, connection, payload).await
            }
            ClientEvent::SendMessage(draft) => MessageHandler::send(state, draft).await,
            ClientEvent::MarkMessageAsSeen(payload) => {
                MessageHandler::mark_seen(state, connection, payload.message_id).await
            }
            ClientEvent::Typing(target) => TypingHandler::typing(state, target).await,
            ClientEvent::StopTyping(target) => TypingHandler::stop_typing(state, target).await,
        }
    }
}
