//! Real-time notification hub for a chat application.
//!
//! HTTP で Room の作成と Chat の投稿を受け付け、
//! WebSocket で接続中の全クライアントへ変更通知をブロードキャストします。

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
