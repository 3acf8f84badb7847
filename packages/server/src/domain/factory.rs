//! Domain factories for creating domain entities and value objects.

use roomcast_shared::time::now_clock_time;

use super::{
    entity::{ChatMessage, SYSTEM_SENDER},
    value_object::{ConnectionId, MessageText, UserName},
};

/// Factory for generating ConnectionId instances.
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    /// Generate a new ConnectionId with a random UUID v4.
    pub fn generate() -> ConnectionId {
        ConnectionId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Factory for chat messages stamped with the current local time.
pub struct ChatMessageFactory;

impl ChatMessageFactory {
    /// Build a message from a user.
    pub fn from_user(sender: UserName, text: MessageText) -> ChatMessage {
        ChatMessage::new(sender, text, now_clock_time())
    }

    /// Build a notice sent by the relay itself.
    pub fn system(text: impl Into<String>) -> ChatMessage {
        ChatMessage::new(
            UserName::new(SYSTEM_SENDER),
            MessageText::new(text),
            now_clock_time(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_id_factory_generate() {
        // テスト項目: ConnectionIdFactory::generate() で UUID v4 形式の ConnectionId を生成できる
        // when (操作):
        let id = ConnectionIdFactory::generate();

        // then (期待する結果):
        assert_eq!(id.as_str().len(), 36); // UUID v4 の標準長（ハイフン含む）
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_connection_id_factory_generate_uniqueness() {
        // テスト項目: ConnectionIdFactory::generate() は毎回異なる ID を生成する
        assert_ne!(
            ConnectionIdFactory::generate(),
            ConnectionIdFactory::generate()
        );
    }

    #[test]
    fn test_system_message_uses_admin_sender() {
        // テスト項目: システムメッセージの送信者は Admin になり、時刻が付与される
        // when (操作):
        let message = ChatMessageFactory::system("alice has joined the room");

        // then (期待する結果):
        assert!(message.is_system());
        assert_eq!(message.text.as_str(), "alice has joined the room");
        assert!(!message.time.is_empty());
    }

    #[test]
    fn test_user_message_keeps_sender() {
        // テスト項目: ユーザーメッセージは送信者名と本文を保持する
        let message = ChatMessageFactory::from_user(UserName::new("alice"), MessageText::new("hi"));

        assert_eq!(message.sender, UserName::new("alice"));
        assert_eq!(message.text, MessageText::new("hi"));
        assert!(!message.is_system());
    }
}
