//! Domain layer for the chat relay.
//!
//! This module contains the registry of connected users and the rules that
//! govern it, independent of data transfer objects (DTOs) and transport
//! concerns.

pub mod entity;
pub mod factory;
pub mod repository;
pub mod session;
pub mod value_object;

pub use entity::{ChatMessage, SYSTEM_SENDER, User, UserRegistry};
pub use factory::{ChatMessageFactory, ConnectionIdFactory};
pub use repository::UserRepository;
#[cfg(test)]
pub use repository::MockUserRepository;
pub use session::SessionState;
pub use value_object::{ConnectionId, MessageText, RoomName, UserName};
