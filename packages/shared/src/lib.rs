//! Shared utilities for Roomcast.
//!
//! Used by both the relay server and the terminal client.

pub mod logger;
pub mod time;
