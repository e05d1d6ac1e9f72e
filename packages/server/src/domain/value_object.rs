//! Value objects
//!
//! 文字列の値オブジェクトは生成時に前後の空白を取り除き、
//! 空文字列と最大文字数の超過を拒否します。

use uuid::Uuid;

use super::error::ValueObjectError;

/// Room 名の最大文字数
pub const ROOM_NAME_MAX_CHARS: usize = 100;

/// ユーザー名の最大文字数
pub const USERNAME_MAX_CHARS: usize = 50;

/// メッセージ本文の最大文字数
pub const MESSAGE_BODY_MAX_CHARS: usize = 1000;

fn validate_text(
    value: String,
    field: &'static str,
    max: usize,
) -> Result<String, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValueObjectError::Empty(field));
    }

    let actual = trimmed.chars().count();
    if actual > max {
        return Err(ValueObjectError::TooLong { field, max, actual });
    }

    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Room の ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::Empty("room id"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<Uuid> for RoomId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Chat の ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatId(String);

impl ChatId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::Empty("chat id"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<Uuid> for ChatId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }
}

/// Room 名（1〜100 文字）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomName(String);

impl RoomName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        validate_text(value, "room name", ROOM_NAME_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// ユーザー名（1〜50 文字）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        validate_text(value, "username", USERNAME_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Username {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// メッセージ本文（1〜1000 文字）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        validate_text(value, "message", MESSAGE_BODY_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MessageBody {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unix タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_name_is_trimmed() {
        // テスト項目: Room 名の前後の空白が取り除かれる
        // given (前提条件):
        let raw = "  General  ".to_string();

        // when (操作):
        let name = RoomName::new(raw).unwrap();

        // then (期待する結果):
        assert_eq!(name.as_str(), "General");
    }

    #[test]
    fn test_room_name_rejects_blank() {
        // テスト項目: 空白のみの Room 名は拒否される
        // given (前提条件):
        let raw = "   ".to_string();

        // when (操作):
        let result = RoomName::new(raw);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::Empty("room name")));
    }

    #[test]
    fn test_room_name_length_is_counted_in_chars() {
        // テスト項目: 最大文字数はバイト数ではなく文字数で判定される
        // given (前提条件):
        let exactly_max = "縁".repeat(ROOM_NAME_MAX_CHARS);
        let over_max = "縁".repeat(ROOM_NAME_MAX_CHARS + 1);

        // when (操作):
        let ok = RoomName::new(exactly_max);
        let err = RoomName::new(over_max);

        // then (期待する結果):
        assert!(ok.is_ok());
        assert_eq!(
            err,
            Err(ValueObjectError::TooLong {
                field: "room name",
                max: ROOM_NAME_MAX_CHARS,
                actual: ROOM_NAME_MAX_CHARS + 1,
            })
        );
    }

    #[test]
    fn test_username_rejects_too_long() {
        // テスト項目: 最大文字数を超えるユーザー名は拒否される
        // given (前提条件):
        let raw = "a".repeat(USERNAME_MAX_CHARS + 1);

        // when (操作):
        let result = Username::new(raw);

        // then (期待する結果):
        assert!(matches!(result, Err(ValueObjectError::TooLong { .. })));
    }

    #[test]
    fn test_message_body_rejects_empty() {
        // テスト項目: 空のメッセージは拒否される
        // given (前提条件):
        let raw = String::new();

        // when (操作):
        let result = MessageBody::new(raw);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::Empty("message")));
    }

    #[test]
    fn test_room_id_from_uuid() {
        // テスト項目: UUID から RoomId が生成される
        // given (前提条件):
        let uuid = Uuid::new_v4();

        // when (操作):
        let room_id = RoomId::from(uuid);

        // then (期待する結果):
        assert_eq!(room_id.as_str(), uuid.to_string());
    }
}
