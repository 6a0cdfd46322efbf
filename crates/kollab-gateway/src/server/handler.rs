//! WebSocket handler
//!
//! Owns the socket lifecycle: one receive task parsing client frames, one
//! send task draining the connection's event channel, cleanup on close.

use std::sync::Arc;

use axum::{
    extract::{ws::Message, State, WebSocketUpgrade},
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use kollab_core::PushEvent;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::connection::Connection;
use crate::handlers::{EventRouter, LifecycleHandler};
use crate::protocol::ClientEvent;
use crate::server::GatewayState;

/// Channel buffer size for outgoing events
const EVENT_BUFFER_SIZE: usize = 100;

/// WebSocket upgrade handler
pub async fn socket_handler(
    State(state): State<GatewayState>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(state, socket))
}

/// Handle an upgraded WebSocket connection
async fn handle_socket(state: GatewayState, socket: axum::extract::ws::WebSocket) {
    let session_id = Uuid::new_v4().to_string();

    // Channel for outgoing events
    let (tx, mut rx) = mpsc::channel::<PushEvent>(EVENT_BUFFER_SIZE);

    // Track the connection
    let connection = state.registry().add_connection(session_id.clone(), tx);

    tracing::info!(session_id = %session_id, "WebSocket connection established");

    let (mut ws_sink, mut ws_stream) = socket.split();

    // Clone state for the receive task
    let state_recv = state.clone();
    let session_id_recv = session_id.clone();
    let connection_recv = connection.clone();

    // Receive client frames
    let recv_task = tokio::spawn(async move {
        while let Some(msg) = ws_stream.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    handle_text_frame(&state_recv, &connection_recv, &text).await;
                }
                Ok(Message::Binary(_)) => {
                    tracing::debug!(
                        session_id = %session_id_recv,
                        "Binary frames not supported"
                    );
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {
                    // Handled by axum
                }
                Ok(Message::Close(_)) => {
                    tracing::info!(session_id = %session_id_recv, "Client closed connection");
                    break;
                }
                Err(e) => {
                    tracing::warn!(
                        session_id = %session_id_recv,
                        error = %e,
                        "WebSocket error"
                    );
                    break;
                }
            }
        }
    });

    // Clone for the send task
    let session_id_send = session_id.clone();

    // Drain outgoing events to the socket
    let send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(json) => {
                    if ws_sink.send(Message::Text(json)).await.is_err() {
                        tracing::warn!(
                            session_id = %session_id_send,
                            "Failed to send event to WebSocket"
                        );
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(
                        session_id = %session_id_send,
                        error = %e,
                        "Failed to serialize push event"
                    );
                }
            }
        }

        // Close the socket when the channel is closed
        let _ = ws_sink.close().await;
    });

    // Wait for either direction to finish
    tokio::select! {
        _ = recv_task => {
            tracing::debug!(session_id = %session_id, "Receive task ended");
        }
        _ = send_task => {
            tracing::debug!(session_id = %session_id, "Send task ended");
        }
    }

    cleanup_connection(&state, &session_id, &connection).await;
}

/// Handle one text frame from the client.
///
/// All failures are scoped to this frame: malformed frames are dropped
/// with a debug log, relay errors are pushed back to the submitting
/// connection only. Nothing here tears the socket down.
async fn handle_text_frame(state: &GatewayState, connection: &Arc<Connection>, text: &str) {
    let event = match ClientEvent::from_json(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!(
                session_id = %connection.session_id(),
                error = %e,
                "Failed to parse client frame"
            );
            connection.try_send(PushEvent::error("INVALID_PAYLOAD", e.to_string()));
            return;
        }
    };

    if let Err(e) = EventRouter::dispatch(state, connection, event).await {
        tracing::warn!(
            session_id = %connection.session_id(),
            error = %e,
            "Handler error"
        );
        connection.try_send(e.to_push_event());
    }
}

/// Clean up a connection on disconnect
async fn cleanup_connection(state: &GatewayState, session_id: &str, connection: &Arc<Connection>) {
    tracing::info!(session_id = %session_id, "Cleaning up connection");

    // Unbind from the registry; broadcasts the new online set if this was
    // still the user's active handle
    LifecycleHandler::disconnect(state, connection).await;

    // Forget the socket
    state.registry().remove_connection(session_id);
}
