//! InMemory Room Repository 実装

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{RepositoryError, Room, RoomId, RoomRepository};

/// インメモリ Room Repository 実装
#[derive(Default)]
pub struct InMemoryRoomRepository {
    rooms: RwLock<HashMap<RoomId, Room>>,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn add_room(&self, room: Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.write().await;
        if rooms.contains_key(&room.id) {
            return Err(RepositoryError::DuplicateRoom(room.id.into_string()));
        }
        rooms.insert(room.id.clone(), room);
        Ok(())
    }

    async fn get_room(&self, room_id: &RoomId) -> Option<Room> {
        let rooms = self.rooms.read().await;
        rooms.get(room_id).cloned()
    }

    async fn get_rooms(&self) -> Vec<Room> {
        let mut rooms: Vec<Room> = self.rooms.read().await.values().cloned().collect();
        // HashMap の順序は不定なので、作成日時 → ID の順で並べる
        rooms.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        rooms
    }

    async fn count_rooms(&self) -> usize {
        self.rooms.read().await.len()
    }

    async fn update_room(&self, room: Room) -> bool {
        let mut rooms = self.rooms.write().await;
        match rooms.get_mut(&room.id) {
            Some(existing) => {
                *existing = room;
                true
            }
            None => false,
        }
    }

    async fn delete_room(&self, room_id: &RoomId) -> bool {
        self.rooms.write().await.remove(room_id).is_some()
    }
}
