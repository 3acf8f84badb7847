//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - ブロードキャスト対象の選定（送信者を含むルーム全員）
//!
//! ### なぜこのテストが必要か
//! - 他のルームにメッセージが漏れないことを保証
//! - 未入室の接続からのメッセージが無視されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：ルーム内へのブロードキャスト
//! - 正常系：イベントに名前が含まれない場合はレジストリの名前を使う
//! - 異常系：未入室の接続からの送信

use std::sync::Arc;

use crate::domain::{ChatMessageFactory, ConnectionId, MessageText, UserName, UserRepository};

use super::{
    dispatch::{Dispatch, Notice, room_audience},
    error::RelayError,
};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn UserRepository>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `id` - 送信者の接続 ID
    /// * `name` - イベントに含まれる送信者名（省略時はレジストリの名前）
    /// * `text` - メッセージ本文
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Dispatch>)` - ルーム全員（送信者を含む）宛ての通知
    /// * `Err(RelayError::UnknownUser)` - 未入室の接続
    pub async fn execute(
        &self,
        id: ConnectionId,
        name: Option<UserName>,
        text: MessageText,
    ) -> Result<Vec<Dispatch>, RelayError> {
        let user = self
            .repository
            .find(&id)
            .await
            .ok_or_else(|| RelayError::UnknownUser(id.clone()))?;

        let sender = name.unwrap_or(user.name);
        let audience = room_audience(self.repository.as_ref(), &user.room, None).await;
        let message = ChatMessageFactory::from_user(sender, text);

        Ok(vec![Dispatch::new(audience, Notice::Message(message))])
    }
}
