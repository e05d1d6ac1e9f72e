//! Notifier trait と通知の種類
//!
//! 状態変更（Room 作成、Chat 投稿）を接続中の全クライアントへ知らせるための
//! インターフェースです。具体的な配送は Infrastructure 層の Hub が担います。

use std::fmt;

use async_trait::async_trait;

use super::NotifyError;

/// クライアントに送る通知
///
/// ワイヤ上では固定のテキストトークンとして送信されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// Room が作成された（`"new-room"`）
    RoomCreated,
    /// Chat が投稿された（`"new-chat"`）
    ChatPosted,
}

impl Notification {
    pub const fn as_wire(&self) -> &'static str {
        match self {
            Self::RoomCreated => "new-room",
            Self::ChatPosted => "new-chat",
        }
    }

    pub fn from_wire(token: &str) -> Option<Self> {
        match token {
            "new-room" => Some(Self::RoomCreated),
            "new-chat" => Some(Self::ChatPosted),
            _ => None,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Notifier trait
///
/// 呼び出し側は配送結果を待ちません（fire-and-forget）。
/// エラーになるのは通知先そのものが停止している場合のみです。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError>;
}
