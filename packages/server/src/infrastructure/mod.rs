//! Infrastructure layer
//!
//! - `hub`: 接続中の全クライアントへの通知配送（Notifier の実装）
//! - `connection`: WebSocket 接続の Hub への引き渡しと切断検知
//! - `repository`: Repository の実装
//! - `dto`: HTTP API の DTO

pub mod connection;
pub mod dto;
pub mod hub;
pub mod repository;
