//! Conversion logic between domain entities and DTOs.

use tsudoi_shared::time::timestamp_to_jst_rfc3339;

use crate::domain::{Chat, Room};

use super::http::{ChatDto, RoomDetailDto, RoomDto};

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.into_string(),
            name: room.name.into_string(),
            created_at: timestamp_to_jst_rfc3339(room.created_at.value()),
        }
    }
}

impl From<Chat> for ChatDto {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id.into_string(),
            room_id: chat.room_id.into_string(),
            username: chat.username.into_string(),
            message: chat.message.into_string(),
            created_at: timestamp_to_jst_rfc3339(chat.created_at.value()),
        }
    }
}

impl From<(Room, Vec<Chat>)> for RoomDetailDto {
    fn from((room, chats): (Room, Vec<Chat>)) -> Self {
        Self {
            room: room.into(),
            chats: chats.into_iter().map(ChatDto::from).collect(),
        }
    }
}
