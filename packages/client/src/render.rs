//! Rendering of server events for the terminal.

use roomcast_server::infrastructure::dto::websocket::ServerEvent;

/// Format one server event as a single terminal line.
pub fn render_event(event: &ServerEvent) -> String {
    match event {
        ServerEvent::Message { name, text, time } => format!("[{time}] {name}: {text}"),
        ServerEvent::UserList { users } => {
            let room = users.first().map(|user| user.room.as_str()).unwrap_or("");
            let names: Vec<&str> = users.iter().map(|user| user.name.as_str()).collect();
            format!("users in {room}: {}", names.join(", "))
        }
        ServerEvent::RoomList { rooms } => format!("rooms: {}", rooms.join(", ")),
        ServerEvent::Activity { name } => format!("{name} is typing..."),
    }
}
