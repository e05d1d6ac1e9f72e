//! Request handlers.

pub mod http;
pub mod websocket;

pub use http::{create_room, get_chats, get_room_detail, get_rooms, health_check, post_chat};
pub use websocket::websocket_handler;
