//! UseCase: Room 一覧取得

use std::sync::Arc;

use crate::domain::{Room, RoomRepository};

pub struct GetRoomsUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomsUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 全ての Room を作成日時の昇順で返す
    pub async fn execute(&self) -> Vec<Room> {
        self.repository.get_rooms().await
    }
}
