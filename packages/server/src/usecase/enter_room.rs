//! UseCase: ルーム入室・移動処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - EnterRoomUseCase::execute() メソッド
//! - 入室時に生成される通知の内容・宛先・順序
//!
//! ### なぜこのテストが必要か
//! - 移動元ルームへの退室通知と名簿更新が漏れないことを保証
//! - 移動したユーザー自身が移動元の通知を受け取らないことを確認
//! - ルーム一覧が全接続に配信されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：最初の入室
//! - 正常系：別ルームへの移動
//! - エッジケース：同じルームへの再入室（全通知を再送する）

use std::sync::Arc;

use crate::domain::{ChatMessageFactory, ConnectionId, RoomName, UserName, UserRepository};

use super::dispatch::{
    Audience, Dispatch, Notice, room_audience, room_list_dispatch, user_list_dispatch,
};

/// ルーム入室のユースケース
pub struct EnterRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn UserRepository>,
}

impl EnterRoomUseCase {
    /// 新しい EnterRoomUseCase を作成
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// 入室を実行
    ///
    /// # Arguments
    ///
    /// * `id` - 入室する接続の ID
    /// * `name` - 表示名
    /// * `room` - 入室先のルーム名
    ///
    /// # Returns
    ///
    /// 送信順に並んだ通知のリスト
    pub async fn execute(&self, id: ConnectionId, name: UserName, room: RoomName) -> Vec<Dispatch> {
        let repository = self.repository.as_ref();
        let mut dispatches = Vec::new();

        // 1. 移動元ルームに退室を通知（移動するユーザー自身は除外）
        let previous_room = repository.find(&id).await.map(|user| user.room);
        if let Some(previous_room) = &previous_room {
            dispatches.push(Dispatch::new(
                room_audience(repository, previous_room, Some(&id)).await,
                Notice::Message(ChatMessageFactory::system(format!(
                    "{name} has left the room"
                ))),
            ));
        }

        // 2. レジストリを更新
        let user = repository.activate(id.clone(), name, room).await;

        // 3. 移動元ルームの名簿を更新
        if let Some(previous_room) = &previous_room {
            dispatches.push(user_list_dispatch(repository, previous_room).await);
        }

        // 4. 本人への入室メッセージ、他の参加者への入室通知
        dispatches.push(Dispatch::new(
            Audience::Connection(id.clone()),
            Notice::Message(ChatMessageFactory::system(format!(
                "You have joined the {} chat room",
                user.room
            ))),
        ));
        dispatches.push(Dispatch::new(
            room_audience(repository, &user.room, Some(&id)).await,
            Notice::Message(ChatMessageFactory::system(format!(
                "{} has joined the room",
                user.name
            ))),
        ));

        // 5. 入室先ルームの名簿と全体のルーム一覧を更新
        dispatches.push(user_list_dispatch(repository, &user.room).await);
        dispatches.push(room_list_dispatch(repository).await);

        tracing::debug!(
            "Connection '{}' entered '{}' as '{}' ({} dispatches)",
            id,
            user.room,
            user.name,
            dispatches.len()
        );

        dispatches
    }
}
