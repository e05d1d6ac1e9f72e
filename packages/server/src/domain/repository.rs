//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{Chat, ChatId, RepositoryError, Room, RoomId};

/// Room Repository trait
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Room を追加
    async fn add_room(&self, room: Room) -> Result<(), RepositoryError>;

    /// Room を ID で取得
    async fn get_room(&self, room_id: &RoomId) -> Option<Room>;

    /// 全ての Room を作成日時の昇順で取得
    async fn get_rooms(&self) -> Vec<Room>;

    /// Room 数を取得
    async fn count_rooms(&self) -> usize;

    /// 既存の Room を置き換える（存在しなかった場合は `false`）
    async fn update_room(&self, room: Room) -> bool;

    /// Room を削除（存在しなかった場合は `false`）
    ///
    /// その Room の Chat は削除しない。必要なら `ChatRepository::delete_chats_by_room` を併用する。
    async fn delete_room(&self, room_id: &RoomId) -> bool;
}

/// Chat Repository trait
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Chat を追加
    async fn add_chat(&self, chat: Chat) -> Result<(), RepositoryError>;

    /// Chat を ID で取得
    async fn get_chat(&self, chat_id: &ChatId) -> Option<Chat>;

    /// Room の Chat を投稿順で取得
    async fn get_chats_by_room(&self, room_id: &RoomId) -> Vec<Chat>;

    /// Chat を削除（存在しなかった場合は `false`）
    async fn delete_chat(&self, chat_id: &ChatId) -> bool;

    /// Room の Chat を全て削除し、削除した件数を返す
    async fn delete_chats_by_room(&self, room_id: &RoomId) -> usize;
}
