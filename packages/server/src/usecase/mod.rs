//! UseCase layer
//!
//! ドメイン層の trait（Repository / Notifier）だけに依存し、
//! 具体的な実装は main で注入します。

mod create_room;
mod error;
mod get_chats;
mod get_room_detail;
mod get_rooms;
mod post_chat;

pub use create_room::CreateRoomUseCase;
pub use error::{CreateRoomError, GetRoomError, PostChatError};
pub use get_chats::GetChatsUseCase;
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use post_chat::PostChatUseCase;
