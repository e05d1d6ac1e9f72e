//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::ValueObjectError,
    infrastructure::dto::http::{
        ChatDto, CreateRoomForm, ErrorDto, HealthDto, PostChatForm, RoomDetailDto, RoomDto,
    },
    ui::state::AppState,
    usecase::{CreateRoomError, GetRoomError, PostChatError},
};

type ApiError = (StatusCode, Json<ErrorDto>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorDto::new(message)))
}

fn room_not_found(error: GetRoomError) -> ApiError {
    api_error(StatusCode::NOT_FOUND, error.to_string())
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    let connections = state.hub.connection_count().await.ok();
    Json(HealthDto {
        status: "ok".to_string(),
        connections,
    })
}

/// Get list of rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomDto>> {
    let rooms = state.get_rooms_usecase.execute().await;
    Json(rooms.into_iter().map(RoomDto::from).collect())
}

/// Create a room and notify every connected client
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateRoomForm>,
) -> Result<(StatusCode, Json<RoomDto>), ApiError> {
    match state.create_room_usecase.execute(form.name).await {
        Ok(room) => {
            tracing::info!(room_id = room.id.as_str(), "Room created");
            Ok((StatusCode::CREATED, Json(room.into())))
        }
        Err(CreateRoomError::InvalidName(ValueObjectError::Empty(_))) => Err(api_error(
            StatusCode::BAD_REQUEST,
            "Room name is required",
        )),
        Err(CreateRoomError::InvalidName(e)) => Err(api_error(StatusCode::BAD_REQUEST, e.to_string())),
        Err(e @ CreateRoomError::Repository(_)) => {
            tracing::error!("Failed to create room: {}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, ApiError> {
    state
        .get_room_detail_usecase
        .execute(room_id)
        .await
        .map(|detail| Json(detail.into()))
        .map_err(room_not_found)
}

/// Get chats of a room
pub async fn get_chats(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<ChatDto>>, ApiError> {
    let chats = state
        .get_chats_usecase
        .execute(room_id)
        .await
        .map_err(room_not_found)?;
    Ok(Json(chats.into_iter().map(ChatDto::from).collect()))
}

/// Post a chat to a room and notify every connected client
pub async fn post_chat(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    Form(form): Form<PostChatForm>,
) -> Result<(StatusCode, Json<ChatDto>), ApiError> {
    match state
        .post_chat_usecase
        .execute(room_id, form.username, form.message)
        .await
    {
        Ok(chat) => {
            tracing::info!(
                chat_id = chat.id.as_str(),
                room_id = chat.room_id.as_str(),
                "Chat posted"
            );
            Ok((StatusCode::CREATED, Json(chat.into())))
        }
        Err(e @ PostChatError::RoomNotFound(_)) => {
            Err(api_error(StatusCode::NOT_FOUND, e.to_string()))
        }
        Err(PostChatError::InvalidUsername(ValueObjectError::Empty(_)))
        | Err(PostChatError::InvalidMessage(ValueObjectError::Empty(_))) => Err(api_error(
            StatusCode::BAD_REQUEST,
            "Username and message are required",
        )),
        Err(e @ (PostChatError::InvalidUsername(_) | PostChatError::InvalidMessage(_))) => {
            Err(api_error(StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e @ PostChatError::Repository(_)) => {
            tracing::error!("Failed to post chat: {}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
