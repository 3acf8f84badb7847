//! Repository trait for the user registry.
//!
//! The domain layer defines the interface; the infrastructure layer provides
//! the implementation (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::User,
    value_object::{ConnectionId, RoomName, UserName},
};

/// Access to the registry of users inside rooms.
///
/// Read methods never change the registry. Only `activate` and `remove`
/// mutate it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or replace the user bound to `id`
    async fn activate(&self, id: ConnectionId, name: UserName, room: RoomName) -> User;

    /// Remove the user bound to `id`, returning the removed entry
    async fn remove(&self, id: &ConnectionId) -> Option<User>;

    /// Look up the user bound to `id`
    async fn find(&self, id: &ConnectionId) -> Option<User>;

    /// Users currently in `room`, in join order
    async fn list_in_room(&self, room: &RoomName) -> Vec<User>;

    /// Distinct active rooms
    async fn list_rooms(&self) -> Vec<RoomName>;

    /// Every registered user, in join order
    async fn snapshot(&self) -> Vec<User>;
}
