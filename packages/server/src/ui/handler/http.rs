//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::RoomName,
    infrastructure::dto::http::{RoomDetailDto, RoomMemberDto, RoomSummaryDto},
    ui::state::AppState,
};

/// Health check endpoint, with the number of open WebSocket connections
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let connections = state.count_connected_clients().await;
    Json(serde_json::json!({"status": "ok", "connections": connections}))
}

/// Get list of active rooms with their members
pub async fn list_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    // Built from a single snapshot so rooms and members agree
    let mut rooms: Vec<RoomSummaryDto> = Vec::new();
    for user in state.repository.snapshot().await {
        match rooms.iter_mut().find(|room| room.name == user.room.as_str()) {
            Some(room) => room.users.push(user.name.into_string()),
            None => rooms.push(RoomSummaryDto {
                name: user.room.into_string(),
                users: vec![user.name.into_string()],
            }),
        }
    }

    Json(rooms)
}

/// Get room detail by name
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    let users = state.repository.list_in_room(&RoomName::new(room.clone())).await;

    // A room without members does not exist
    if users.is_empty() {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(RoomDetailDto {
        name: room,
        users: users
            .into_iter()
            .map(|user| RoomMemberDto {
                id: user.id.into_string(),
                name: user.name.into_string(),
            })
            .collect(),
    }))
}
