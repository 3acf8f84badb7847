//! Roomcast chat relay server.
//!
//! Clients connect over WebSocket, enter named rooms, and broadcast messages
//! and typing notices to the other occupants of the same room.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::{run, serve};
