//! Typing signal handlers
//!
//! Pure forwarding; an unreachable receiver means the signal is silently
//! dropped.

use kollab_service::TypingKind;

use super::HandlerResult;
use crate::protocol::TypingTarget;
use crate::server::GatewayState;

/// Handles typing and stopTyping
pub struct TypingHandler;

impl TypingHandler {
    /// Forward a typing signal
    pub async fn typing(state: &GatewayState, target: TypingTarget) -> HandlerResult<()> {
        state
            .typing_relay()
            .signal(TypingKind::Typing, &target.sender_id, &target.receiver_id)
            .await;
        Ok(())
    }

    /// Forward a stop-typing signal
    pub async fn stop_typing(state: &GatewayState, target: TypingTarget) -> HandlerResult<()> {
        state
            .typing_relay()
            .signal(TypingKind::StopTyping, &target.sender_id, &target.receiver_id)
            .await;
        Ok(())
    }
}
