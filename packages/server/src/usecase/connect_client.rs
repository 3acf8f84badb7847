//! UseCase: 接続時の挨拶

use crate::domain::{ChatMessageFactory, ConnectionId};

use super::dispatch::{Audience, Dispatch, Notice};

/// Greeting sent to a freshly opened connection
pub const WELCOME_TEXT: &str = "Welcome to the Chat App!";

/// 接続直後の通知を組み立てるユースケース
///
/// レジストリには触れない。入室するまでユーザーは登録されない。
#[derive(Debug, Default)]
pub struct ConnectClientUseCase;

impl ConnectClientUseCase {
    pub fn new() -> Self {
        Self
    }

    /// 本人への歓迎メッセージと、他の全接続への接続通知を返す
    pub fn execute(&self, id: &ConnectionId) -> Vec<Dispatch> {
        vec![
            Dispatch::new(
                Audience::Connection(id.clone()),
                Notice::Message(ChatMessageFactory::system(WELCOME_TEXT)),
            ),
            Dispatch::new(
                Audience::EveryoneExcept(id.clone()),
                Notice::Message(ChatMessageFactory::system(format!(
                    "User {} connected",
                    id.short()
                ))),
            ),
        ]
    }
}
