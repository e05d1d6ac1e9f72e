//! UseCase error types.

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// Room 作成のエラー
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CreateRoomError {
    #[error("invalid room name: {0}")]
    InvalidName(#[from] ValueObjectError),

    #[error("failed to store room: {0}")]
    Repository(#[from] RepositoryError),
}

/// Chat 投稿のエラー
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostChatError {
    #[error("Room '{0}' not found")]
    RoomNotFound(String),

    #[error("invalid username: {0}")]
    InvalidUsername(ValueObjectError),

    #[error("invalid message: {0}")]
    InvalidMessage(ValueObjectError),

    #[error("failed to store chat: {0}")]
    Repository(#[from] RepositoryError),
}

/// Room 参照のエラー
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GetRoomError {
    #[error("Room '{0}' not found")]
    RoomNotFound(String),
}
