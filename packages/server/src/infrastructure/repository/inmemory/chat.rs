//! InMemory Chat Repository 実装

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Chat, ChatId, ChatRepository, RepositoryError, RoomId};

#[derive(Default)]
struct ChatStore {
    chats: HashMap<ChatId, Chat>,
    /// Room ID ごとの二次インデックス（投稿順）
    chats_by_room: HashMap<RoomId, Vec<ChatId>>,
}

/// インメモリ Chat Repository 実装
#[derive(Default)]
pub struct InMemoryChatRepository {
    store: RwLock<ChatStore>,
}

impl InMemoryChatRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn add_chat(&self, chat: Chat) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        if store.chats.contains_key(&chat.id) {
            return Err(RepositoryError::DuplicateChat(chat.id.into_string()));
        }
        store
            .chats_by_room
            .entry(chat.room_id.clone())
            .or_default()
            .push(chat.id.clone());
        store.chats.insert(chat.id.clone(), chat);
        Ok(())
    }

    async fn get_chat(&self, chat_id: &ChatId) -> Option<Chat> {
        self.store.read().await.chats.get(chat_id).cloned()
    }

    async fn get_chats_by_room(&self, room_id: &RoomId) -> Vec<Chat> {
        let store = self.store.read().await;
        store
            .chats_by_room
            .get(room_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| store.chats.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    async fn delete_chat(&self, chat_id: &ChatId) -> bool {
        let mut store = self.store.write().await;
        let Some(chat) = store.chats.remove(chat_id) else {
            return false;
        };

        if let Some(ids) = store.chats_by_room.get_mut(&chat.room_id) {
            ids.retain(|id| id != chat_id);
            if ids.is_empty() {
                store.chats_by_room.remove(&chat.room_id);
            }
        }
        true
    }

    async fn delete_chats_by_room(&self, room_id: &RoomId) -> usize {
        let mut store = self.store.write().await;
        let Some(ids) = store.chats_by_room.remove(room_id) else {
            return 0;
        };

        for id in &ids {
            store.chats.remove(id);
        }
        ids.len()
    }
}
