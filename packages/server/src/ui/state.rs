//! Server state.

use std::sync::Arc;

use tsudoi_shared::time::Clock;

use crate::{
    domain::{ChatRepository, Notifier, RoomRepository},
    infrastructure::hub::HubHandle,
    usecase::{
        CreateRoomUseCase, GetChatsUseCase, GetRoomDetailUseCase, GetRoomsUseCase,
        PostChatUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// Hub（WebSocket 接続の登録先）
    pub hub: HubHandle,
    pub create_room_usecase: Arc<CreateRoomUseCase>,
    pub post_chat_usecase: Arc<PostChatUseCase>,
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    pub get_chats_usecase: Arc<GetChatsUseCase>,
}

impl AppState {
    /// Repository と Hub から UseCase を組み立てる
    ///
    /// Hub は Notifier として Room 作成 / Chat 投稿の UseCase に注入される。
    pub fn new(
        hub: HubHandle,
        rooms: Arc<dyn RoomRepository>,
        chats: Arc<dyn ChatRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let notifier: Arc<dyn Notifier> = Arc::new(hub.clone());

        Self {
            create_room_usecase: Arc::new(CreateRoomUseCase::new(
                rooms.clone(),
                notifier.clone(),
                clock.clone(),
            )),
            post_chat_usecase: Arc::new(PostChatUseCase::new(
                rooms.clone(),
                chats.clone(),
                notifier,
                clock,
            )),
            get_rooms_usecase: Arc::new(GetRoomsUseCase::new(rooms.clone())),
            get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(
                rooms.clone(),
                chats.clone(),
            )),
            get_chats_usecase: Arc::new(GetChatsUseCase::new(rooms, chats)),
            hub,
        }
    }
}
