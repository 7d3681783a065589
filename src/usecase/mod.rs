//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod connect_member;
pub mod create_room;
pub mod disconnect_member;
pub mod error;
pub mod join_room;
pub mod save_chat;
pub mod send_message;

pub use connect_member::ConnectMemberUseCase;
pub use create_room::CreateRoomUseCase;
pub use disconnect_member::DisconnectMemberUseCase;
pub use error::{CreateRoomError, JoinRoomError, SaveChatError};
pub use join_room::JoinRoomUseCase;
pub use save_chat::SaveChatUseCase;
pub use send_message::SendMessageUseCase;
