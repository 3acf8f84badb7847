//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。
//! 各ユースケースは配信計画（[`Dispatch`] のリスト）を返し、実際の送信は UI 層が行います。

pub mod connect_client;
pub mod disconnect_client;
pub mod dispatch;
pub mod enter_room;
pub mod error;
pub mod relay_activity;
pub mod router;
pub mod send_message;

pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use dispatch::{Audience, Dispatch, Notice};
pub use enter_room::EnterRoomUseCase;
pub use error::RelayError;
pub use relay_activity::RelayActivityUseCase;
pub use router::{Command, EventRouter, Transition};
pub use send_message::SendMessageUseCase;
