//! WebSocket chat relay transport.

mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{build_app, run, serve};
