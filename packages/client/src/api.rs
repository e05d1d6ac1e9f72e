//! HTTP API client.

use reqwest::{Client, Response};
use tsudoi_server::infrastructure::dto::http::{ChatDto, ErrorDto, RoomDto};

use crate::{
    domain::{normalize_base_url, notification_url},
    error::ClientError,
};

/// Thin wrapper over the server's `/api` endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the WebSocket notification stream
    pub fn notification_url(&self) -> String {
        notification_url(&self.base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/rooms`
    pub async fn get_rooms(&self) -> Result<Vec<RoomDto>, ClientError> {
        let response = self.http.get(self.url("/api/rooms")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `POST /api/rooms`
    pub async fn create_room(&self, name: &str) -> Result<RoomDto, ClientError> {
        let response = self
            .http
            .post(self.url("/api/rooms"))
            .form(&[("name", name)])
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `GET /api/rooms/{room_id}/chats`
    pub async fn get_chats(&self, room_id: &str) -> Result<Vec<ChatDto>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/rooms/{}/chats", room_id)))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `POST /api/rooms/{room_id}/chats`
    pub async fn post_chat(
        &self,
        room_id: &str,
        username: &str,
        message: &str,
    ) -> Result<ChatDto, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("/api/rooms/{}/chats", room_id)))
            .form(&[("username", username), ("message", message)])
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }
}

/// Turn an error status into `ClientError::Api`, using the server's error
/// body when it has one.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorDto>(&body) {
        Ok(error) => error.error,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
        Err(_) => body,
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
