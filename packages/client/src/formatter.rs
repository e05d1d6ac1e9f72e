//! Output formatting utilities for client display.

use tsudoi_server::{
    domain::Notification,
    infrastructure::dto::http::{ChatDto, RoomDto},
};
use tsudoi_shared::time::timestamp_to_jst_clock;

const RULE: &str = "------------------------------------------------------------";

/// Output formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a notification pushed by the server
    ///
    /// # Arguments
    ///
    /// * `notification` - The decoded notification
    /// * `received_at` - Unix timestamp when it arrived (milliseconds)
    pub fn format_notification(notification: Notification, received_at: i64) -> String {
        let what = match notification {
            Notification::RoomCreated => "A new room was created (/rooms to refresh)",
            Notification::ChatPosted => "A new chat was posted (/chats <room_id> to refresh)",
        };
        format!("\n[{}] * {}\n", timestamp_to_jst_clock(received_at), what)
    }

    /// Format a text frame that is not a known notification
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }

    /// Format the room list
    pub fn format_rooms(rooms: &[RoomDto]) -> String {
        let mut output = format!("\n{}\nRooms:\n", RULE);
        if rooms.is_empty() {
            output.push_str("(No rooms)\n");
        }
        for room in rooms {
            output.push_str(&format!(
                "[{}] {} - created at {}\n",
                room.id, room.name, room.created_at
            ));
        }
        output.push_str(RULE);
        output.push('\n');
        output
    }

    /// Format the chats of one room
    pub fn format_chats(room_id: &str, chats: &[ChatDto]) -> String {
        let mut output = format!("\n{}\nChats in room {}:\n", RULE, room_id);
        if chats.is_empty() {
            output.push_str("(No chats)\n");
        }
        for chat in chats {
            output.push_str(&format!(
                "@{}: {}\n  sent at {}\n",
                chat.username, chat.message, chat.created_at
            ));
        }
        output.push_str(RULE);
        output.push('\n');
        output
    }

    pub fn format_room_created(room: &RoomDto) -> String {
        format!("Created room [{}] {}\n", room.id, room.name)
    }

    pub fn format_chat_posted(chat: &ChatDto) -> String {
        format!("Posted to room {} at {}\n", chat.room_id, chat.created_at)
    }

    pub fn format_help(lines: &[&str]) -> String {
        let mut output = String::from("\nCommands:\n");
        for line in lines {
            output.push_str("  ");
            output.push_str(line);
            output.push('\n');
        }
        output
    }

    pub fn format_error(error: &dyn std::error::Error) -> String {
        format!("! {}\n", error)
    }
}
