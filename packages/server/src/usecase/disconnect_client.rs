//! UseCase: 切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectClientUseCase::execute() メソッド
//! - 切断時の通知対象選定とレジストリからの削除
//!
//! ### なぜこのテストが必要か
//! - 切断したユーザーが名簿・ルーム一覧から消えることを保証
//! - 最後の参加者が切断したルームがルーム一覧から消えることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：他の参加者がいるルームからの切断
//! - エッジケース：最後の参加者の切断
//! - エッジケース：未入室の接続の切断（通知なし）

use std::sync::Arc;

use crate::domain::{ChatMessageFactory, ConnectionId, UserRepository};

use super::dispatch::{Dispatch, Notice, room_audience, room_list_dispatch, user_list_dispatch};

/// 切断のユースケース
pub struct DisconnectClientUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn UserRepository>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// 切断を実行
    ///
    /// # Returns
    ///
    /// 送信順に並んだ通知のリスト（未入室の接続なら空）
    pub async fn execute(&self, id: &ConnectionId) -> Vec<Dispatch> {
        let repository = self.repository.as_ref();

        let Some(user) = repository.remove(id).await else {
            return Vec::new();
        };

        vec![
            Dispatch::new(
                room_audience(repository, &user.room, None).await,
                Notice::Message(ChatMessageFactory::system(format!(
                    "{} has left the room",
                    user.name
                ))),
            ),
            user_list_dispatch(repository, &user.room).await,
            room_list_dispatch(repository).await,
        ]
    }
}
