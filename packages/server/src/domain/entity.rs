//! Entities

use super::value_object::{ChatId, MessageBody, RoomId, RoomName, Timestamp, Username};

/// チャットルーム
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: RoomName,
    pub created_at: Timestamp,
}

impl Room {
    pub fn new(id: RoomId, name: RoomName, created_at: Timestamp) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}

/// Room に投稿されたチャットメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: ChatId,
    pub room_id: RoomId,
    pub username: Username,
    pub message: MessageBody,
    pub created_at: Timestamp,
}

impl Chat {
    pub fn new(
        id: ChatId,
        room_id: RoomId,
        username: Username,
        message: MessageBody,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            room_id,
            username,
            message,
            created_at,
        }
    }
}
