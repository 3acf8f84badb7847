//! Broadcast router: per-connection state machine over client commands.
//!
//! The caller supplies the connection's current [`SessionState`]; the router
//! hands the command to the matching use case and answers with the next state
//! and the dispatch plan to deliver.

use std::sync::Arc;

use crate::domain::{ConnectionId, MessageText, RoomName, SessionState, UserName, UserRepository};

use super::{
    ConnectClientUseCase, DisconnectClientUseCase, EnterRoomUseCase, RelayActivityUseCase,
    SendMessageUseCase, dispatch::Dispatch, error::RelayError,
};

/// Input accepted by the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Socket opened
    Connect,
    /// Join or switch room
    EnterRoom { name: UserName, room: RoomName },
    /// Chat message; `name` falls back to the registered name
    Message {
        name: Option<UserName>,
        text: MessageText,
    },
    /// Typing indicator
    Activity { name: UserName },
    /// Socket closed
    Disconnect,
}

/// Result of one handled command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State of the connection after the command
    pub state: SessionState,
    /// Notices to deliver, in order
    pub dispatches: Vec<Dispatch>,
}

pub struct EventRouter {
    repository: Arc<dyn UserRepository>,
}

impl EventRouter {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Handle one command from connection `id`, currently in `state`.
    ///
    /// `Message` and `Activity` from a connection that has not entered a room
    /// yield [`RelayError::UnknownUser`]. Anything after `Disconnect` yields
    /// [`RelayError::Closed`]. Callers drop both silently.
    pub async fn handle(
        &self,
        id: &ConnectionId,
        state: SessionState,
        command: Command,
    ) -> Result<Transition, RelayError> {
        let transition = match (state, command) {
            (SessionState::Disconnected, _) => {
                return Err(RelayError::Closed(id.clone()));
            }
            (state, Command::Connect) => Transition {
                state,
                dispatches: ConnectClientUseCase::new().execute(id),
            },
            (_, Command::EnterRoom { name, room }) => {
                let dispatches = EnterRoomUseCase::new(self.repository.clone())
                    .execute(id.clone(), name, room.clone())
                    .await;
                Transition {
                    state: SessionState::InRoom(room),
                    dispatches,
                }
            }
            (SessionState::Connected, Command::Message { .. } | Command::Activity { .. }) => {
                return Err(RelayError::UnknownUser(id.clone()));
            }
            (state @ SessionState::InRoom(_), Command::Message { name, text }) => Transition {
                dispatches: SendMessageUseCase::new(self.repository.clone())
                    .execute(id.clone(), name, text)
                    .await?,
                state,
            },
            (state @ SessionState::InRoom(_), Command::Activity { name }) => Transition {
                dispatches: RelayActivityUseCase::new(self.repository.clone())
                    .execute(id.clone(), name)
                    .await?,
                state,
            },
            (_, Command::Disconnect) => Transition {
                state: SessionState::Disconnected,
                dispatches: DisconnectClientUseCase::new(self.repository.clone())
                    .execute(id)
                    .await,
            },
        };

        tracing::debug!(
            "Connection '{}' is now {:?} ({} dispatches)",
            id,
            transition.state,
            transition.dispatches.len()
        );

        Ok(transition)
    }
}
