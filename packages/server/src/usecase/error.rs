//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::ConnectionId;

/// Outcomes that resolve to a silent no-op towards the client
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The connection has not entered a room
    #[error("Connection '{0}' has not entered a room")]
    UnknownUser(ConnectionId),

    /// The connection has already been disconnected
    #[error("Connection '{0}' is closed")]
    Closed(ConnectionId),
}
