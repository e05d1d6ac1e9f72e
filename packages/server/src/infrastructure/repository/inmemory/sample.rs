//! デモ用のサンプルデータ

use tsudoi_shared::time::{Clock, MILLIS_PER_HOUR, MILLIS_PER_MINUTE};

use crate::domain::{
    Chat, ChatId, ChatRepository, MessageBody, RepositoryError, Room, RoomId, RoomName,
    RoomRepository, Timestamp, Username, ValueObjectError,
};

/// サンプルデータ投入時のエラー
#[derive(Debug, thiserror::Error)]
pub enum SampleDataError {
    #[error(transparent)]
    InvalidValue(#[from] ValueObjectError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Room 2 件と Chat 3 件を投入する
///
/// - General（24 時間前に作成）: Alice と Bob の Chat
/// - Technology（2 時間前に作成）: Charlie の Chat
pub async fn seed_sample_data(
    rooms: &dyn RoomRepository,
    chats: &dyn ChatRepository,
    clock: &dyn Clock,
) -> Result<(), SampleDataError> {
    let now = clock.now_jst_millis();
    let ago = |millis: i64| Timestamp::new(now - millis);

    let general = RoomId::new("1".to_string())?;
    let technology = RoomId::new("2".to_string())?;

    rooms
        .add_room(Room::new(
            general.clone(),
            RoomName::new("General".to_string())?,
            ago(24 * MILLIS_PER_HOUR),
        ))
        .await?;
    rooms
        .add_room(Room::new(
            technology.clone(),
            RoomName::new("Technology".to_string())?,
            ago(2 * MILLIS_PER_HOUR),
        ))
        .await?;

    let samples = [
        ("1", &general, "Alice", "Hello everyone!", 20),
        ("2", &general, "Bob", "Hi Alice, how are you?", 15),
        ("3", &technology, "Charlie", "Anyone interested in Go programming?", 5),
    ];
    for (id, room_id, username, message, minutes_ago) in samples {
        chats
            .add_chat(Chat::new(
                ChatId::new(id.to_string())?,
                room_id.clone(),
                Username::new(username.to_string())?,
                MessageBody::new(message.to_string())?,
                ago(minutes_ago * MILLIS_PER_MINUTE),
            ))
            .await?;
    }

    tracing::info!(
        rooms = rooms.count_rooms().await,
        "Sample rooms and chats added"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::{InMemoryChatRepository, InMemoryRoomRepository};
    use tsudoi_shared::time::FixedClock;

    #[tokio::test]
    async fn test_seed_sample_data() {
        // テスト項目: サンプルデータが投入され、作成日時が時計基準で設定される
        // given (前提条件):
        let rooms = InMemoryRoomRepository::new();
        let chats = InMemoryChatRepository::new();
        let now = 100 * MILLIS_PER_HOUR;
        let clock = FixedClock::new(now);

        // when (操作):
        seed_sample_data(&rooms, &chats, &clock).await.unwrap();

        // then (期待する結果):
        let all_rooms = rooms.get_rooms().await;
        assert_eq!(all_rooms.len(), 2);
        assert_eq!(all_rooms[0].name.as_str(), "General");
        assert_eq!(all_rooms[0].created_at.value(), now - 24 * MILLIS_PER_HOUR);
        assert_eq!(all_rooms[1].name.as_str(), "Technology");

        let general_chats = chats.get_chats_by_room(&all_rooms[0].id).await;
        let usernames: Vec<&str> = general_chats.iter().map(|c| c.username.as_str()).collect();
        assert_eq!(usernames, vec!["Alice", "Bob"]);
        let technology_chats = chats.get_chats_by_room(&all_rooms[1].id).await;
        assert_eq!(technology_chats.len(), 1);
        assert_eq!(technology_chats[0].username.as_str(), "Charlie");
        assert_eq!(
            technology_chats[0].message.as_str(),
            "Anyone interested in Go programming?"
        );
        assert_eq!(
            technology_chats[0].created_at.value(),
            now - 5 * MILLIS_PER_MINUTE
        );
    }

    #[tokio::test]
    async fn test_seed_twice_fails_with_duplicate() {
        // テスト項目: 2 回投入すると重複エラーになる
        // given (前提条件):
        let rooms = InMemoryRoomRepository::new();
        let chats = InMemoryChatRepository::new();
        let clock = FixedClock::new(MILLIS_PER_HOUR * 48);
        seed_sample_data(&rooms, &chats, &clock).await.unwrap();

        // when (操作):
        let result = seed_sample_data(&rooms, &chats, &clock).await;

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(SampleDataError::Repository(RepositoryError::DuplicateRoom(_)))
        ));
    }
}
