//! Per-connection session state.
//!
//! ```text
//! Connected --enterRoom--> InRoom --enterRoom--> InRoom
//!     |                      |
//!     +------disconnect------+--> Disconnected
//! ```

use super::value_object::RoomName;

/// Where a connection stands in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Socket open, no room entered yet
    Connected,
    /// Member of exactly one room
    InRoom(RoomName),
    /// Socket closed. Terminal.
    Disconnected,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_disconnected_is_terminal() {
        // テスト項目: 終端状態は Disconnected のみ
        assert!(!SessionState::Connected.is_terminal());
        assert!(!SessionState::InRoom(RoomName::new("lobby")).is_terminal());
        assert!(SessionState::Disconnected.is_terminal());
    }
}
