//! Data Transfer Objects
//!
//! - `http`: HTTP API のリクエスト / レスポンス
//! - `conversion`: ドメインエンティティから DTO への変換

pub mod conversion;
pub mod http;
