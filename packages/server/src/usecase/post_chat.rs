//! UseCase: Chat 投稿
//!
//! Room の存在を確認してから Chat を保存し、`ChatPosted` を通知します。
//! 通知は Room を区別せず、接続中の全クライアントに届きます。

use std::sync::Arc;

use tsudoi_shared::time::Clock;

use crate::domain::{
    Chat, ChatIdFactory, ChatRepository, MessageBody, Notification, Notifier, RoomId,
    RoomRepository, Timestamp, Username,
};

use super::error::PostChatError;

/// Chat 投稿のユースケース
pub struct PostChatUseCase {
    rooms: Arc<dyn RoomRepository>,
    chats: Arc<dyn ChatRepository>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl PostChatUseCase {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        chats: Arc<dyn ChatRepository>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            rooms,
            chats,
            notifier,
            clock,
        }
    }

    /// Chat 投稿を実行
    ///
    /// Room が存在しない場合は入力の検証より先に `RoomNotFound` を返す。
    pub async fn execute(
        &self,
        raw_room_id: String,
        username: String,
        message: String,
    ) -> Result<Chat, PostChatError> {
        // 1. Room の存在確認
        let Ok(room_id) = RoomId::new(raw_room_id.clone()) else {
            return Err(PostChatError::RoomNotFound(raw_room_id));
        };
        if self.rooms.get_room(&room_id).await.is_none() {
            return Err(PostChatError::RoomNotFound(raw_room_id));
        }

        // 2. 入力の検証
        let username = Username::new(username).map_err(PostChatError::InvalidUsername)?;
        let message = MessageBody::new(message).map_err(PostChatError::InvalidMessage)?;

        // 3. Repository に保存
        let chat = Chat::new(
            ChatIdFactory::generate(),
            room_id,
            username,
            message,
            Timestamp::new(self.clock.now_jst_millis()),
        );
        self.chats.add_chat(chat.clone()).await?;

        // 4. 全クライアントに通知
        if let Err(e) = self.notifier.notify(Notification::ChatPosted).await {
            tracing::warn!(chat_id = chat.id.as_str(), "Failed to notify chat post: {}", e);
        }

        Ok(chat)
    }
}
