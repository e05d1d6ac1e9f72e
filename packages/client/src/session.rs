//! Notification stream session.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};
use tsudoi_server::domain::Notification;
use tsudoi_shared::time::get_jst_timestamp;

use crate::{
    api::ApiClient,
    command::{Command, help_lines},
    error::ClientError,
    formatter::MessageFormatter,
    ui::redisplay_prompt,
};

/// Run one connection to the notification stream
///
/// Returns `Ok(())` when the user quits and an error when the stream drops.
pub async fn run_client_session(
    api: &ApiClient,
    username: &str,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let url = api.notification_url();
    let (ws_stream, _response) = connect_async(&url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to {}", url);
    println!(
        "\nYou are '{}'. Type /help for commands. Press Ctrl+C to exit.\n",
        username
    );
    redisplay_prompt(username);

    let (mut write, mut read) = ws_stream.split();

    // Spawn a task to print incoming notifications
    let username_for_read = username.to_string();
    let mut read_task = tokio::spawn(async move {
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let formatted = match Notification::from_wire(text.as_str()) {
                        Some(notification) => {
                            MessageFormatter::format_notification(notification, get_jst_timestamp())
                        }
                        None => MessageFormatter::format_raw_message(text.as_str()),
                    };
                    print!("{}", formatted);
                    redisplay_prompt(&username_for_read);
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    return;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    return;
                }
                _ => {}
            }
        }
    });

    loop {
        tokio::select! {
            _ = &mut read_task => {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
            line = input_rx.recv() => {
                let command = match line.as_deref().map(Command::parse) {
                    // Ctrl+C / Ctrl+D closes the input channel
                    None | Some(Ok(Command::Quit)) => break,
                    Some(Ok(command)) => command,
                    Some(Err(e)) => {
                        print!("{}", MessageFormatter::format_error(&e));
                        redisplay_prompt(username);
                        continue;
                    }
                };
                print!("{}", execute(api, username, command).await);
                redisplay_prompt(username);
            }
        }
    }

    read_task.abort();
    if let Err(e) = write.close().await {
        tracing::debug!("Failed to close WebSocket: {}", e);
    }
    Ok(())
}

/// Run a command against the HTTP API and render the outcome
async fn execute(api: &ApiClient, username: &str, command: Command) -> String {
    let result = match command {
        Command::ListRooms => api
            .get_rooms()
            .await
            .map(|rooms| MessageFormatter::format_rooms(&rooms)),
        Command::CreateRoom { name } => api
            .create_room(&name)
            .await
            .map(|room| MessageFormatter::format_room_created(&room)),
        Command::ListChats { room_id } => api
            .get_chats(&room_id)
            .await
            .map(|chats| MessageFormatter::format_chats(&room_id, &chats)),
        Command::PostChat { room_id, message } => api
            .post_chat(&room_id, username, &message)
            .await
            .map(|chat| MessageFormatter::format_chat_posted(&chat)),
        Command::Help => Ok(MessageFormatter::format_help(&help_lines())),
        Command::Quit => Ok(String::new()),
    };

    result.unwrap_or_else(|e| MessageFormatter::format_error(&e))
}
