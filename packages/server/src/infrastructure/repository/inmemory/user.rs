//! InMemory User Repository 実装
//!
//! ドメイン層が定義する UserRepository trait の具体的な実装。
//! ドメインモデル（`UserRegistry`）をそのままインメモリ DB として使用します。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, RoomName, User, UserName, UserRegistry, UserRepository};

/// インメモリ User Repository 実装
///
/// 各メソッドはロックを自身の処理の間だけ保持します。
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    registry: Arc<Mutex<UserRegistry>>,
}

impl InMemoryUserRepository {
    /// 空のレジストリで InMemoryUserRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn activate(&self, id: ConnectionId, name: UserName, room: RoomName) -> User {
        let mut registry = self.registry.lock().await;
        registry.activate(id, name, room)
    }

    async fn remove(&self, id: &ConnectionId) -> Option<User> {
        let mut registry = self.registry.lock().await;
        registry.remove(id)
    }

    async fn find(&self, id: &ConnectionId) -> Option<User> {
        let registry = self.registry.lock().await;
        registry.find(id).cloned()
    }

    async fn list_in_room(&self, room: &RoomName) -> Vec<User> {
        let registry = self.registry.lock().await;
        registry.list_in_room(room)
    }

    async fn list_rooms(&self) -> Vec<RoomName> {
        let registry = self.registry.lock().await;
        registry.list_rooms()
    }

    async fn snapshot(&self) -> Vec<User> {
        let registry = self.registry.lock().await;
        registry.users().to_vec()
    }
}
