//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ConnectionIdFactory},
    infrastructure::dto::websocket::ClientEvent,
    ui::state::AppState,
    usecase::Command,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionIdFactory::generate();

    // Create a channel for this connection to receive events
    let (tx, mut rx) = mpsc::unbounded_channel();
    state.register(connection_id.clone(), tx).await;
    tracing::info!("Connection '{}' opened", connection_id);

    handle_command(&state, &connection_id, Command::Connect).await;

    let (mut sender, mut receiver) = socket.split();

    let recv_id = connection_id.clone();
    let recv_state = state.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", recv_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received from '{}': {}", recv_id, text.as_str());

                    match serde_json::from_str::<ClientEvent>(text.as_str()) {
                        Ok(event) => handle_command(&recv_state, &recv_id, event.into()).await,
                        Err(e) => {
                            tracing::warn!("Ignoring malformed event from '{}': {}", recv_id, e);
                        }
                    }
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", recv_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to forward queued events to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    handle_command(&state, &connection_id, Command::Disconnect).await;

    if let Some(client_info) = state.unregister(&connection_id).await {
        tracing::info!(
            "Connection '{}' closed after {:?}",
            connection_id,
            client_info.connected_at.elapsed()
        );
    }
}

/// Route one command and deliver the resulting notices.
///
/// Commands that do not apply in the connection's current state are dropped.
async fn handle_command(state: &AppState, id: &ConnectionId, command: Command) {
    if let Err(e) = state.handle(id, command).await {
        tracing::debug!("Dropped event: {}", e);
    }
}
