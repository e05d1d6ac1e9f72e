//! UseCase: Room の Chat 一覧取得

use std::sync::Arc;

use crate::domain::{Chat, ChatRepository, RoomRepository};

use super::{error::GetRoomError, get_room_detail::find_room};

pub struct GetChatsUseCase {
    rooms: Arc<dyn RoomRepository>,
    chats: Arc<dyn ChatRepository>,
}

impl GetChatsUseCase {
    pub fn new(rooms: Arc<dyn RoomRepository>, chats: Arc<dyn ChatRepository>) -> Self {
        Self { rooms, chats }
    }

    /// Room の Chat を投稿順で返す
    pub async fn execute(&self, room_id: String) -> Result<Vec<Chat>, GetRoomError> {
        let room = find_room(self.rooms.as_ref(), room_id).await?;
        Ok(self.chats.get_chats_by_room(&room.id).await)
    }
}
