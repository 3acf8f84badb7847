//! Dispatch plan produced by the use cases and delivered by the transport.

use crate::domain::{ChatMessage, ConnectionId, RoomName, User, UserName, UserRepository};

/// Who receives a notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    /// A single connection
    Connection(ConnectionId),
    /// A fixed set of connections, resolved from a room roster
    Members(Vec<ConnectionId>),
    /// Every open connection, whether or not it has entered a room
    Everyone,
    /// Every open connection except one
    EveryoneExcept(ConnectionId),
}

impl Audience {
    /// Whether `id` is part of this audience
    pub fn includes(&self, id: &ConnectionId) -> bool {
        match self {
            Self::Connection(target) => target == id,
            Self::Members(members) => members.contains(id),
            Self::Everyone => true,
            Self::EveryoneExcept(excluded) => excluded != id,
        }
    }
}

/// What is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Chat or system message
    Message(ChatMessage),
    /// Roster snapshot of one room
    UserList(Vec<User>),
    /// All active rooms
    RoomList(Vec<RoomName>),
    /// Typing indicator
    Activity(UserName),
}

/// One notice addressed to one audience
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub audience: Audience,
    pub notice: Notice,
}

impl Dispatch {
    pub fn new(audience: Audience, notice: Notice) -> Self {
        Self { audience, notice }
    }
}

/// Resolve the current members of `room` into an audience, optionally
/// leaving one connection out.
pub(crate) async fn room_audience(
    repository: &dyn UserRepository,
    room: &RoomName,
    except: Option<&ConnectionId>,
) -> Audience {
    let members = repository
        .list_in_room(room)
        .await
        .into_iter()
        .map(|user| user.id)
        .filter(|id| Some(id) != except)
        .collect();
    Audience::Members(members)
}

/// Roster update for `room`, addressed to its current members.
pub(crate) async fn user_list_dispatch(repository: &dyn UserRepository, room: &RoomName) -> Dispatch {
    let users = repository.list_in_room(room).await;
    let members = users.iter().map(|user| user.id.clone()).collect();
    Dispatch::new(Audience::Members(members), Notice::UserList(users))
}

/// Active-room list, addressed to every connection.
pub(crate) async fn room_list_dispatch(repository: &dyn UserRepository) -> Dispatch {
    Dispatch::new(
        Audience::Everyone,
        Notice::RoomList(repository.list_rooms().await),
    )
}
