//! InMemory Repository 実装
//!
//! HashMap をインメモリ DB として使用します。
//! 各ストアはそれぞれ独立した `RwLock` で保護され、Hub とはロックを共有しません。

mod chat;
mod room;
pub mod sample;

pub use chat::InMemoryChatRepository;
pub use room::InMemoryRoomRepository;
