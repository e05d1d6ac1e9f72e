//! Domain layer
//!
//! ## 概要
//!
//! ドメイン層はビジネスルールを表現します。
//! 他の層（Infrastructure / UseCase / UI）に依存しません。
//!
//! - `value_object`: 値オブジェクト（RoomId, RoomName, Username など）
//! - `entity`: エンティティ（Room, Chat）
//! - `factory`: ID の生成
//! - `repository`: データアクセスのインターフェース（trait）
//! - `notifier`: 通知のインターフェース（trait）と通知の種類

pub mod entity;
pub mod error;
pub mod factory;
pub mod notifier;
pub mod repository;
pub mod value_object;

pub use entity::{Chat, Room};
pub use error::{NotifyError, RepositoryError, ValueObjectError};
pub use factory::{ChatIdFactory, RoomIdFactory};
pub use notifier::{Notification, Notifier};
pub use repository::{ChatRepository, RoomRepository};
pub use value_object::{ChatId, MessageBody, RoomId, RoomName, Timestamp, Username};

#[cfg(test)]
pub use notifier::MockNotifier;
