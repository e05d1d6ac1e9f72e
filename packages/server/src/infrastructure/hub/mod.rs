//! Connection-broadcast hub
//!
//! ## 概要
//!
//! 接続中の全てのストリーミング接続を管理し、通知を全員に配送します。
//!
//! - `HubHandle`: イベント（登録 / 登録解除 / ブロードキャスト）を投入する側
//! - `Hub`: イベントを 1 つずつ処理する唯一のタスク。`Registry` を所有する
//! - `Connection`: Hub が書き込みに使う接続の抽象（WebSocket 実装は `infrastructure::connection`）
//!
//! ## 設計ノート
//!
//! Registry を変更するのは Hub のタスクだけです。
//! 他のタスクは必ず `HubHandle` 経由でイベントを送ります。
//! 1 つの接続への送信失敗・タイムアウト・パニックはその接続の除外のみで扱い、
//! 他の接続への配送や Hub の動作には影響しません。

mod config;
mod connection;
mod coordinator;
mod error;
mod event;
mod handle;
mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_SEND_TIMEOUT, HubConfig};
pub use connection::{Connection, ConnectionId, Payload};
pub use coordinator::Hub;
pub use error::{ConnectionError, HubError};
pub use handle::HubHandle;
