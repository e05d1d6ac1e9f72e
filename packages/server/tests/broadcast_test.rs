//! WebSocket notification integration tests.

mod common;

use common::{TestServer, next_text};
use reqwest::StatusCode;

#[tokio::test]
async fn test_create_room_notifies_every_client() {
    // テスト項目: Room を作成すると接続中の全クライアントに new-room が届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect().await;
    let mut bob = server.connect().await;

    // when (操作):
    let response = server
        .http
        .post(server.url("/api/rooms"))
        .form(&[("name", "Random")])
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(next_text(&mut alice).await, "new-room");
    assert_eq!(next_text(&mut bob).await, "new-room");
}

#[tokio::test]
async fn test_post_chat_notifies_every_client() {
    // テスト項目: Chat を投稿すると接続中の全クライアントに new-chat が届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect().await;
    let mut bob = server.connect().await;

    // when (操作):
    let response = server
        .http
        .post(server.url("/api/rooms/1/chats"))
        .form(&[("username", "Alice"), ("message", "ping")])
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(next_text(&mut alice).await, "new-chat");
    assert_eq!(next_text(&mut bob).await, "new-chat");
}

#[tokio::test]
async fn test_notifications_arrive_in_submission_order() {
    // テスト項目: 連続した通知が送信した順にクライアントへ届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect().await;

    // when (操作):
    server
        .http
        .post(server.url("/api/rooms"))
        .form(&[("name", "Random")])
        .send()
        .await
        .unwrap();
    server
        .http
        .post(server.url("/api/rooms/1/chats"))
        .form(&[("username", "Alice"), ("message", "first")])
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(next_text(&mut alice).await, "new-room");
    assert_eq!(next_text(&mut alice).await, "new-chat");
}

#[tokio::test]
async fn test_rejected_request_sends_no_notification() {
    // テスト項目: 400 になったリクエストでは通知が送られない
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect().await;

    // when (操作):
    let rejected = server
        .http
        .post(server.url("/api/rooms/1/chats"))
        .form(&[("username", "Alice"), ("message", "")])
        .send()
        .await
        .unwrap();
    server
        .http
        .post(server.url("/api/rooms"))
        .form(&[("name", "Random")])
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    // 最初に届くのは後続の new-room
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    assert_eq!(next_text(&mut alice).await, "new-room");
}

#[tokio::test]
async fn test_closed_client_is_unregistered() {
    // テスト項目: クライアントが切断すると登録が解除され、残りのクライアントには引き続き届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect().await;
    let mut bob = server.connect().await;

    // when (操作):
    bob.close(None).await.unwrap();
    server.wait_for_connections(1).await;

    server
        .http
        .post(server.url("/api/rooms"))
        .form(&[("name", "Random")])
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(next_text(&mut alice).await, "new-room");
    assert_eq!(server.connections().await, 1);
}

#[tokio::test]
async fn test_dropped_client_is_unregistered() {
    // テスト項目: Close フレームを送らずに切れた接続も登録が解除される
    // given (前提条件):
    let server = TestServer::start().await;
    let alice = server.connect().await;

    // when (操作):
    drop(alice);

    // then (期待する結果):
    server.wait_for_connections(0).await;
}

#[tokio::test]
async fn test_plain_get_on_ws_endpoint_is_rejected() {
    // テスト項目: アップグレードを伴わないリクエストはエラーになり、接続は登録されない
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let response = server.http.get(server.url("/ws")).send().await.unwrap();

    // then (期待する結果):
    assert!(response.status().is_client_error());
    assert_eq!(server.connections().await, 0);
}
