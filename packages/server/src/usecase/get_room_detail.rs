//! UseCase: Room 詳細取得

use std::sync::Arc;

use crate::domain::{Chat, ChatRepository, Room, RoomId, RoomRepository};

use super::error::GetRoomError;

pub struct GetRoomDetailUseCase {
    rooms: Arc<dyn RoomRepository>,
    chats: Arc<dyn ChatRepository>,
}

impl GetRoomDetailUseCase {
    pub fn new(rooms: Arc<dyn RoomRepository>, chats: Arc<dyn ChatRepository>) -> Self {
        Self { rooms, chats }
    }

    /// Room とその Chat（投稿順）を返す
    pub async fn execute(&self, room_id: String) -> Result<(Room, Vec<Chat>), GetRoomError> {
        let room = find_room(self.rooms.as_ref(), room_id).await?;
        let chats = self.chats.get_chats_by_room(&room.id).await;
        Ok((room, chats))
    }
}

/// Room を ID で探す（ID が不正な場合も見つからなかったものとして扱う）
pub(super) async fn find_room(
    rooms: &dyn RoomRepository,
    room_id: String,
) -> Result<Room, GetRoomError> {
    let Ok(id) = RoomId::new(room_id.clone()) else {
        return Err(GetRoomError::RoomNotFound(room_id));
    };
    rooms
        .get_room(&id)
        .await
        .ok_or(GetRoomError::RoomNotFound(room_id))
}
