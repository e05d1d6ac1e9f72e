//! UseCase: Room 作成
//!
//! Room を保存した後、接続中の全クライアントに `RoomCreated` を通知します。
//! 通知の失敗は Room の作成結果には影響しません。

use std::sync::Arc;

use tsudoi_shared::time::Clock;

use crate::domain::{Notification, Notifier, Room, RoomIdFactory, RoomName, RoomRepository, Timestamp};

use super::error::CreateRoomError;

/// Room 作成のユースケース
pub struct CreateRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl CreateRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            notifier,
            clock,
        }
    }

    /// Room 作成を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Room)` - 作成された Room
    /// * `Err(CreateRoomError)` - 名前が不正、または保存に失敗
    pub async fn execute(&self, name: String) -> Result<Room, CreateRoomError> {
        // 1. 入力の検証
        let name = RoomName::new(name)?;

        // 2. Repository に保存
        let room = Room::new(
            RoomIdFactory::generate(),
            name,
            Timestamp::new(self.clock.now_jst_millis()),
        );
        self.repository.add_room(room.clone()).await?;

        // 3. 全クライアントに通知
        if let Err(e) = self.notifier.notify(Notification::RoomCreated).await {
            tracing::warn!(room_id = room.id.as_str(), "Failed to notify room creation: {}", e);
        }

        Ok(room)
    }
}
