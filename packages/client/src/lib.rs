//! Terminal client for the Roomcast chat relay.

pub mod command;
pub mod error;
pub mod render;
pub mod session;

pub use session::run_client;
