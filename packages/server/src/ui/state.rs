//! Server state and connection management.

use std::{collections::HashMap, sync::Arc, time::Instant};

use tokio::sync::{Mutex, mpsc};

use crate::{
    domain::{ConnectionId, SessionState, UserRepository},
    infrastructure::dto::websocket::ServerEvent,
    usecase::{Command, Dispatch, EventRouter, RelayError},
};

/// Client connection information
pub struct ClientInfo {
    /// Outbound frame channel, drained by the connection's send task
    pub sender: mpsc::UnboundedSender<String>,
    /// Where the connection stands in its lifecycle
    pub state: SessionState,
    /// When the socket was accepted
    pub connected_at: Instant,
}

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn UserRepository>,
    /// Broadcast router over the same repository
    pub router: EventRouter,
    /// Every open connection, whether or not it has entered a room
    pub connected_clients: Mutex<HashMap<ConnectionId, ClientInfo>>,
    /// Held from routing a command until its last notice is queued
    relay: Mutex<()>,
}

impl AppState {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            router: EventRouter::new(repository.clone()),
            repository,
            connected_clients: Mutex::new(HashMap::new()),
            relay: Mutex::new(()),
        }
    }

    /// Register an open connection
    pub async fn register(&self, id: ConnectionId, sender: mpsc::UnboundedSender<String>) {
        let mut clients = self.connected_clients.lock().await;
        clients.insert(
            id,
            ClientInfo {
                sender,
                state: SessionState::Connected,
                connected_at: Instant::now(),
            },
        );
    }

    /// Forget a closed connection
    pub async fn unregister(&self, id: &ConnectionId) -> Option<ClientInfo> {
        let mut clients = self.connected_clients.lock().await;
        clients.remove(id)
    }

    pub async fn count_connected_clients(&self) -> usize {
        self.connected_clients.lock().await.len()
    }

    /// Route one command from `id` and deliver the resulting notices.
    ///
    /// Commands are handled one at a time across all connections, so every
    /// client sees plans in the order the registry changed. An unregistered
    /// connection counts as [`SessionState::Disconnected`].
    pub async fn handle(
        &self,
        id: &ConnectionId,
        command: Command,
    ) -> Result<SessionState, RelayError> {
        let _relay = self.relay.lock().await;

        let state = self
            .connected_clients
            .lock()
            .await
            .get(id)
            .map_or(SessionState::Disconnected, |client| client.state.clone());

        let transition = self.router.handle(id, state, command).await?;

        if let Some(client) = self.connected_clients.lock().await.get_mut(id) {
            client.state = transition.state.clone();
        }
        self.deliver(transition.dispatches).await;

        Ok(transition.state)
    }

    /// Deliver a dispatch plan in order.
    ///
    /// Recipients that have already gone away or disconnected are skipped.
    pub async fn deliver(&self, dispatches: Vec<Dispatch>) {
        let clients = self.connected_clients.lock().await;

        for Dispatch { audience, notice } in dispatches {
            let event = ServerEvent::from(notice);
            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize {:?}: {}", event, e);
                    continue;
                }
            };

            let recipients = clients.iter().filter(|(id, client_info)| {
                !client_info.state.is_terminal() && audience.includes(id)
            });
            for (id, client_info) in recipients {
                if client_info.sender.send(json.clone()).is_err() {
                    tracing::warn!("Failed to send to connection '{}'", id);
                }
            }
        }
    }
}
