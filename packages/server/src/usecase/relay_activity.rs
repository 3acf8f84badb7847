//! UseCase: 入力中通知の中継

use std::sync::Arc;

use crate::domain::{ConnectionId, UserName, UserRepository};

use super::{
    dispatch::{Dispatch, Notice, room_audience},
    error::RelayError,
};

/// 入力中通知を同じルームの他の参加者へ中継するユースケース
pub struct RelayActivityUseCase {
    repository: Arc<dyn UserRepository>,
}

impl RelayActivityUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// 送信者を除くルームの参加者宛ての通知を返す
    pub async fn execute(
        &self,
        id: ConnectionId,
        name: UserName,
    ) -> Result<Vec<Dispatch>, RelayError> {
        let user = self
            .repository
            .find(&id)
            .await
            .ok_or_else(|| RelayError::UnknownUser(id.clone()))?;

        let audience = room_audience(self.repository.as_ref(), &user.room, Some(&id)).await;
        Ok(vec![Dispatch::new(audience, Notice::Activity(name))])
    }
}
