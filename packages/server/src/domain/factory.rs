//! ID factories

use uuid::Uuid;

use super::value_object::{ChatId, RoomId};

/// RoomId の生成（UUID v4）
pub struct RoomIdFactory;

impl RoomIdFactory {
    pub fn generate() -> RoomId {
        RoomId::from(Uuid::new_v4())
    }
}

/// ChatId の生成（UUID v4）
pub struct ChatIdFactory;

impl ChatIdFactory {
    pub fn generate() -> ChatId {
        ChatId::from(Uuid::new_v4())
    }
}
