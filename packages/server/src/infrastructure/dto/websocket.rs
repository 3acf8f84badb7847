//! WebSocket event DTOs for the chat relay.
//!
//! Every frame is a JSON object tagged by `"type"`.

use serde::{Deserialize, Serialize};

use crate::{
    domain::{MessageText, RoomName, User, UserName},
    usecase::{Command, Notice},
};

/// Event sent by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Join or switch room
    EnterRoom {
        #[serde(default)]
        name: String,
        #[serde(default)]
        room: String,
    },
    /// Chat message
    Message {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        text: String,
    },
    /// Typing indicator
    Activity {
        #[serde(default)]
        name: String,
    },
}

impl From<ClientEvent> for Command {
    fn from(event: ClientEvent) -> Self {
        match event {
            ClientEvent::EnterRoom { name, room } => Command::EnterRoom {
                name: UserName::new(name),
                room: RoomName::new(room),
            },
            ClientEvent::Message { name, text } => Command::Message {
                name: name.map(UserName::new),
                text: MessageText::new(text),
            },
            ClientEvent::Activity { name } => Command::Activity {
                name: UserName::new(name),
            },
        }
    }
}

/// Roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub room: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_string(),
            name: user.name.into_string(),
            room: user.room.into_string(),
        }
    }
}

/// Event sent by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Chat or system message
    Message {
        name: String,
        text: String,
        /// Local wall-clock time, e.g. `3:07 PM`
        time: String,
    },
    /// Roster snapshot of one room
    UserList { users: Vec<UserDto> },
    /// Active rooms
    RoomList { rooms: Vec<String> },
    /// Someone is typing
    Activity { name: String },
}

impl From<Notice> for ServerEvent {
    fn from(notice: Notice) -> Self {
        match notice {
            Notice::Message(message) => ServerEvent::Message {
                name: message.sender.into_string(),
                text: message.text.into_string(),
                time: message.time,
            },
            Notice::UserList(users) => ServerEvent::UserList {
                users: users.into_iter().map(UserDto::from).collect(),
            },
            Notice::RoomList(rooms) => ServerEvent::RoomList {
                rooms: rooms.into_iter().map(RoomName::into_string).collect(),
            },
            Notice::Activity(name) => ServerEvent::Activity {
                name: name.into_string(),
            },
        }
    }
}
