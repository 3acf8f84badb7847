//! HTTP API integration tests.
//!
//! Tests for REST API endpoints (health check, room list, room details),
//! static file fallback and CORS.

mod fixtures;

use std::path::PathBuf;

use fixtures::{TestClient, TestServer};
use roomcast_server::{ServerConfig, config::Environment};

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /api/health エンドポイントが正常に動作する
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["connections"], 0);
}

#[tokio::test]
async fn test_health_counts_open_connections() {
    // テスト項目: /api/health は入室前を含む接続数を返し、切断で減る
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server).await;
    alice.enter_room("alice", "lobby").await;
    let bob = TestClient::connect(&server).await;
    alice.recv_until(|e| e["type"] == "message").await;
    let health_url = format!("{}/api/health", server.base_url());

    // when (操作):
    let body: serde_json::Value = reqwest::get(&health_url)
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    // then (期待する結果):
    assert_eq!(body["connections"], 2);

    // when (操作): bob が切断
    bob.close().await;

    // then (期待する結果):
    let mut connections = serde_json::Value::Null;
    for _ in 0..50 {
        let body: serde_json::Value = reqwest::get(&health_url)
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse JSON");
        connections = body["connections"].clone();
        if connections == 1 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    assert_eq!(connections, 1);
}

#[tokio::test]
async fn test_rooms_list_is_empty_without_users() {
    // テスト項目: 誰も入室していなければ /api/rooms は空配列を返す
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let response = reqwest::get(format!("{}/api/rooms", server.base_url()))
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_rooms_list_reflects_members() {
    // テスト項目: /api/rooms が入室中のユーザーから導出したルーム一覧を返す
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server).await;
    alice.enter_room("alice", "lobby").await;
    let mut bob = TestClient::connect(&server).await;
    bob.enter_room("bob", "den").await;
    let mut carol = TestClient::connect(&server).await;
    carol.enter_room("carol", "lobby").await;

    // when (操作):
    let response = reqwest::get(format!("{}/api/rooms", server.base_url()))
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body,
        serde_json::json!([
            {"name": "lobby", "users": ["alice", "carol"]},
            {"name": "den", "users": ["bob"]},
        ])
    );
}

#[tokio::test]
async fn test_room_detail_endpoint_success() {
    // テスト項目: /api/rooms/{room} エンドポイントがルームの参加者を返す
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server).await;
    alice.enter_room("alice", "lobby").await;

    // when (操作):
    let response = reqwest::get(format!("{}/api/rooms/lobby", server.base_url()))
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["name"], "lobby");
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["name"], "alice");
    assert!(users[0]["id"].is_string());
}

#[tokio::test]
async fn test_room_detail_endpoint_not_found() {
    // テスト項目: 参加者のいないルームに対して 404 を返す
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let response = reqwest::get(format!("{}/api/rooms/nonexistent", server.base_url()))
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_static_files_are_served() {
    // テスト項目: API 以外のパスは静的ファイルディレクトリから配信される
    // given (前提条件):
    let dir: PathBuf = std::env::temp_dir().join(format!("roomcast-static-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<h1>Roomcast</h1>").unwrap();
    let server = TestServer::start_with(ServerConfig {
        static_dir: dir.clone(),
        ..ServerConfig::default()
    })
    .await;

    // when (操作):
    let found = reqwest::get(format!("{}/index.html", server.base_url()))
        .await
        .expect("Failed to send request");
    let missing = reqwest::get(format!("{}/missing.html", server.base_url()))
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(found.status(), 200);
    assert_eq!(found.text().await.unwrap(), "<h1>Roomcast</h1>");
    assert_eq!(missing.status(), 404);

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_cors_allowed_in_development() {
    // テスト項目: 開発環境ではローカルオリジンからのアクセスを許可する
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .header("Origin", "http://localhost:5500")
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("http://localhost:5500")
    );
}

#[tokio::test]
async fn test_cors_disabled_in_production() {
    // テスト項目: 本番環境ではクロスオリジンアクセスを許可しない
    // given (前提条件):
    let server = TestServer::start_with(ServerConfig {
        environment: Environment::Production,
        ..ServerConfig::default()
    })
    .await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .header("Origin", "http://localhost:5500")
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}
