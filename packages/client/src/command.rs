//! Slash commands typed at the client prompt.

use crate::error::CommandError;

const USAGE_ROOM: &str = "/room <name>";
const USAGE_CHATS: &str = "/chats <room_id>";
const USAGE_CHAT: &str = "/chat <room_id> <message>";

/// A parsed prompt command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/rooms`
    ListRooms,
    /// `/room <name>`
    CreateRoom { name: String },
    /// `/chats <room_id>`
    ListChats { room_id: String },
    /// `/chat <room_id> <message>`
    PostChat { room_id: String, message: String },
    /// `/help`
    Help,
    /// `/quit` or `/exit`
    Quit,
}

impl Command {
    /// Parse one input line
    ///
    /// Arguments are separated from the command by whitespace. The message of
    /// `/chat` is everything after the room ID, so it may contain spaces.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name {
            "/rooms" => Ok(Self::ListRooms),
            "/room" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage(USAGE_ROOM));
                }
                Ok(Self::CreateRoom {
                    name: rest.to_string(),
                })
            }
            "/chats" => {
                if rest.is_empty() || rest.contains(char::is_whitespace) {
                    return Err(CommandError::Usage(USAGE_CHATS));
                }
                Ok(Self::ListChats {
                    room_id: rest.to_string(),
                })
            }
            "/chat" => match rest.split_once(char::is_whitespace) {
                Some((room_id, message)) if !message.trim().is_empty() => Ok(Self::PostChat {
                    room_id: room_id.to_string(),
                    message: message.trim().to_string(),
                }),
                _ => Err(CommandError::Usage(USAGE_CHAT)),
            },
            "/help" => Ok(Self::Help),
            "/quit" | "/exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// One line per command, used by `/help`
pub fn help_lines() -> [&'static str; 6] {
    [
        "/rooms                      list rooms",
        "/room <name>                create a room",
        "/chats <room_id>            list chats in a room",
        "/chat <room_id> <message>   post a chat",
        "/help                       show this help",
        "/quit                       exit",
    ]
}
