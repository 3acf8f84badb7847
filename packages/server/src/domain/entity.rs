//! Core domain models for the chat relay.

use super::value_object::{ConnectionId, MessageText, RoomName, UserName};

/// Sender name used for notices produced by the relay itself
pub const SYSTEM_SENDER: &str = "Admin";

/// A connected client that has entered a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Connection the user is bound to
    pub id: ConnectionId,
    /// Display name
    pub name: UserName,
    /// Room the user currently belongs to
    pub room: RoomName,
}

impl User {
    /// Create a new user
    pub fn new(id: ConnectionId, name: UserName, room: RoomName) -> Self {
        Self { id, name, room }
    }
}

/// A chat message on its way to a room. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Sender's display name
    pub sender: UserName,
    /// Message body
    pub text: MessageText,
    /// Local wall-clock time the message was built, e.g. `3:07 PM`
    pub time: String,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(sender: UserName, text: MessageText, time: String) -> Self {
        Self { sender, text, time }
    }

    /// Whether the relay itself produced this message
    pub fn is_system(&self) -> bool {
        self.sender.as_str() == SYSTEM_SENDER
    }
}

/// Registry of users currently inside a room, in join order.
///
/// Rooms are not stored: they are derived from the `room` of each user on
/// every read. Only [`activate`](Self::activate) and [`remove`](Self::remove)
/// mutate the registry.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the user bound to `id`.
    ///
    /// A replaced entry is dropped and the new one appended, so a user who
    /// re-enters moves to the end of the join order.
    pub fn activate(&mut self, id: ConnectionId, name: UserName, room: RoomName) -> User {
        self.users.retain(|user| user.id != id);
        let user = User::new(id, name, room);
        self.users.push(user.clone());
        user
    }

    /// Remove the user bound to `id`, returning it if present
    pub fn remove(&mut self, id: &ConnectionId) -> Option<User> {
        let position = self.users.iter().position(|user| &user.id == id)?;
        Some(self.users.remove(position))
    }

    /// Look up the user bound to `id`
    pub fn find(&self, id: &ConnectionId) -> Option<&User> {
        self.users.iter().find(|user| &user.id == id)
    }

    /// Users whose current room is `room`, in join order
    pub fn list_in_room(&self, room: &RoomName) -> Vec<User> {
        self.users
            .iter()
            .filter(|user| &user.room == room)
            .cloned()
            .collect()
    }

    /// Distinct rooms in order of first appearance
    pub fn list_rooms(&self) -> Vec<RoomName> {
        let mut rooms: Vec<RoomName> = Vec::new();
        for user in &self.users {
            if !rooms.contains(&user.room) {
                rooms.push(user.room.clone());
            }
        }
        rooms
    }

    /// All users in join order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
