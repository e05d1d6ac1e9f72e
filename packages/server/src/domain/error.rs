//! Domain error types.

use thiserror::Error;

/// 値オブジェクトの検証エラー
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueObjectError {
    /// 空文字列（前後の空白を除いた結果が空の場合も含む）
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// 最大文字数を超えている
    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Repository 操作のエラー
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Room '{0}' already exists")]
    DuplicateRoom(String),

    #[error("Chat '{0}' already exists")]
    DuplicateChat(String),
}

/// 通知のエラー
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotifyError {
    /// 通知先（Hub）が停止している
    #[error("notification hub is no longer running")]
    Closed,
}
