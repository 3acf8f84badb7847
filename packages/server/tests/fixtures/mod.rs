//! Test fixtures: in-process server and WebSocket test client.

#![allow(dead_code)]

use std::{net::SocketAddr, time::Duration};

use futures_util::{SinkExt, StreamExt};
use roomcast_server::ServerConfig;
use serde_json::{Value, json};
use tokio::{net::TcpListener, task::JoinHandle};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Server running on an ephemeral port for the lifetime of the value
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(ServerConfig::default()).await
    }

    pub async fn start_with(config: ServerConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let handle = tokio::spawn(async move {
            if let Err(e) = roomcast_server::serve(listener, &config, std::future::pending()).await {
                eprintln!("Test server error: {e}");
            }
        });

        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// WebSocket client speaking the relay's JSON events
pub struct TestClient {
    stream: WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
}

impl TestClient {
    /// Connect and consume the personal welcome message
    pub async fn connect(server: &TestServer) -> Self {
        let (stream, _) = connect_async(server.ws_url())
            .await
            .expect("Failed to connect");
        let mut client = Self { stream };
        client
            .recv_until(|event| event["type"] == "message" && event["name"] == "Admin")
            .await;
        client
    }

    pub async fn send(&mut self, event: Value) {
        self.send_raw(event.to_string()).await;
    }

    pub async fn send_raw(&mut self, text: String) {
        self.stream
            .send(Message::Text(text.into()))
            .await
            .expect("Failed to send");
    }

    /// Enter a room and wait until the join is acknowledged with a room list
    pub async fn enter_room(&mut self, name: &str, room: &str) {
        self.send(json!({"type": "enterRoom", "name": name, "room": room}))
            .await;
        self.recv_until(|event| event["type"] == "roomList").await;
    }

    /// Next JSON event; panics after a timeout
    pub async fn recv(&mut self) -> Value {
        loop {
            let next = tokio::time::timeout(RECV_TIMEOUT, self.stream.next())
                .await
                .expect("Timed out waiting for event")
                .expect("Stream closed")
                .expect("WebSocket error");
            if let Message::Text(text) = next {
                return serde_json::from_str(text.as_str()).expect("Invalid JSON from server");
            }
        }
    }

    /// Receive until an event matches, returning every event seen (match last)
    pub async fn collect_until<F>(&mut self, predicate: F) -> Vec<Value>
    where
        F: Fn(&Value) -> bool,
    {
        let mut seen = Vec::new();
        loop {
            let event = self.recv().await;
            let matched = predicate(&event);
            seen.push(event);
            if matched {
                return seen;
            }
        }
    }

    /// Receive until an event matches and return it
    pub async fn recv_until<F>(&mut self, predicate: F) -> Value
    where
        F: Fn(&Value) -> bool,
    {
        self.collect_until(predicate)
            .await
            .pop()
            .expect("collect_until always returns the matching event")
    }

    /// Every event that arrives within `window`
    pub async fn drain(&mut self, window: Duration) -> Vec<Value> {
        let mut seen = Vec::new();
        while let Ok(Some(Ok(message))) = tokio::time::timeout(window, self.stream.next()).await {
            if let Message::Text(text) = message {
                seen.push(serde_json::from_str(text.as_str()).expect("Invalid JSON from server"));
            }
        }
        seen
    }

    pub async fn close(mut self) {
        let _ = self.stream.close(None).await;
    }
}

/// Names in a `userList` event
pub fn user_names(event: &Value) -> Vec<String> {
    event["users"]
        .as_array()
        .expect("users should be an array")
        .iter()
        .map(|user| user["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Rooms in a `roomList` event
pub fn room_names(event: &Value) -> Vec<String> {
    event["rooms"]
        .as_array()
        .expect("rooms should be an array")
        .iter()
        .map(|room| room.as_str().unwrap_or_default().to_string())
        .collect()
}

/// Number of rooms if `event` is a `roomList`
pub fn room_count(event: &Value) -> Option<usize> {
    if event["type"] != "roomList" {
        return None;
    }
    event["rooms"].as_array().map(Vec::len)
}
