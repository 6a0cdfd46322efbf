//! Connection lifecycle handler
//!
//! Binds and unbinds handles in the presence registry as connections
//! join and close.

use std::sync::Arc;

use kollab_core::PushEvent;

use super::HandlerResult;
use crate::connection::Connection;
use crate::protocol::JoinPayload;
use crate::server::GatewayState;

/// Handles join and disconnect
pub struct LifecycleHandler;

impl LifecycleHandler {
    /// Bind the claimed identity to this handle.
    ///
    /// A blank userId leaves the handle unbound and inert for relay
    /// purposes; the frame is dropped without error. The identity itself
    /// is trusted - verification happens upstream of the gateway.
    pub async fn join(
        state: &GatewayState,
        connection: &Arc<Connection>,
        payload: JoinPayload,
    ) -> HandlerResult<()> {
        let user_id = payload.user_id.trim();

        if user_id.is_empty() {
            tracing::debug!(
                session_id = %connection.session_id(),
                "Join with blank userId ignored"
            );
            return Ok(());
        }

        connection.set_user_id(user_id.to_string()).await;
        state.registry().register(user_id, connection.clone());

        tracing::info!(
            session_id = %connection.session_id(),
            user_id = %user_id,
            "User joined"
        );

        Ok(())
    }

    /// Unbind this handle on socket close.
    ///
    /// Only when the unregister actually removed an entry (i.e. this was
    /// still the user's active handle) does the online set change, and
    /// only then is the new snapshot broadcast to every connection.
    pub async fn disconnect(state: &GatewayState, connection: &Arc<Connection>) {
        if state.registry().unregister(connection).await {
            let online = state.registry().snapshot();
            state.registry().broadcast(PushEvent::user_status(online));

            tracing::info!(
                session_id = %connection.session_id(),
                "User went offline, status broadcast"
            );
        }
    }
}
