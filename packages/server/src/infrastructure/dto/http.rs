//! HTTP API DTOs.

use serde::{Deserialize, Serialize};

/// Room の概要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDto {
    pub id: String,
    pub name: String,
    /// JST RFC 3339
    pub created_at: String,
}

/// Chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatDto {
    pub id: String,
    pub room_id: String,
    pub username: String,
    pub message: String,
    /// JST RFC 3339
    pub created_at: String,
}

/// Room の詳細（Chat を含む）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub room: RoomDto,
    pub chats: Vec<ChatDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    /// 接続中の WebSocket 数（Hub が停止している場合は None）
    pub connections: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// `POST /api/rooms` のフォーム
///
/// 未入力を 400 として扱うため、欠けたフィールドは空文字列として受け取る。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRoomForm {
    #[serde(default)]
    pub name: String,
}

/// `POST /api/rooms/{id}/chats` のフォーム
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostChatForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_json_shape() {
        // テスト項目: ヘルスチェックの JSON が status と connections を持つ
        // given (前提条件):
        let health = HealthDto {
            status: "ok".to_string(),
            connections: Some(3),
        };

        // when (操作):
        let json = serde_json::to_value(&health).unwrap();

        // then (期待する結果):
        assert_eq!(json, serde_json::json!({ "status": "ok", "connections": 3 }));
    }

    #[test]
    fn test_error_json_shape() {
        // テスト項目: エラーの JSON が error フィールドだけを持つ
        // given (前提条件):
        let error = ErrorDto::new("Room name is required");

        // when (操作):
        let json = serde_json::to_value(&error).unwrap();

        // then (期待する結果):
        assert_eq!(json, serde_json::json!({ "error": "Room name is required" }));
    }
}
