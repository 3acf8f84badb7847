//! HTTP API response DTOs for the chat relay.

use serde::{Deserialize, Serialize};

/// Room summary for list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub name: String,
    /// Member names in join order
    pub users: Vec<String>,
}

/// Room detail for detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub name: String,
    pub users: Vec<RoomMemberDto>,
}

/// Member entry for room detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomMemberDto {
    pub id: String,
    pub name: String,
}
