//! WebSocket を使った Connection 実装（書き込み側）
//!
//! ## 責務
//!
//! - WebSocket の送信側（`SplitSink`）を保持し、Hub からのペイロードをテキストフレームとして送信
//! - close 時にクローズフレームを送り、読み込みタスクへ close シグナルを送る
//!
//! 2 回目以降の close は何もしません。

use std::fmt::Display;

use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use futures_util::{Sink, SinkExt, stream::SplitSink};
use tokio::sync::oneshot;

use crate::infrastructure::hub::{Connection, ConnectionError, Payload};

/// Receiving side of the close signal, held by the reader task.
pub type CloseSignal = oneshot::Receiver<()>;

/// WebSocket を使った Connection 実装
pub struct WebSocketConnection<S = SplitSink<WebSocket, Message>> {
    sink: S,
    /// 読み込みタスクへの close シグナル（close 時、または破棄時に発火）
    close_signal: Option<oneshot::Sender<()>>,
    closed: bool,
}

impl<S> WebSocketConnection<S> {
    /// 新しい WebSocketConnection と、対になる読み込みタスク用の close シグナルを作成
    pub fn new(sink: S) -> (Self, CloseSignal) {
        let (tx, rx) = oneshot::channel();
        let connection = Self {
            sink,
            close_signal: Some(tx),
            closed: false,
        };
        (connection, rx)
    }
}

#[async_trait]
impl<S> Connection for WebSocketConnection<S>
where
    S: Sink<Message> + Unpin + Send,
    S::Error: Display,
{
    async fn send(&mut self, payload: &Payload) -> Result<(), ConnectionError> {
        if self.closed {
            return Err(ConnectionError::Closed);
        }

        self.sink
            .send(Message::Text(payload.as_str().into()))
            .await
            .map_err(|e| ConnectionError::Send(e.to_string()))
    }

    async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        // 読み込みタスクを先に止める（読み込み側から重複して登録解除させない）
        if let Some(signal) = self.close_signal.take() {
            let _ = signal.send(());
        }

        // 相手がすでに切断している場合はどちらも失敗するが、無視してよい
        if let Err(e) = self.sink.send(Message::Close(None)).await {
            tracing::debug!("Failed to send close frame: {}", e);
        }
        if let Err(e) = self.sink.close().await {
            tracing::debug!("Failed to close WebSocket sink: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::sink;
    use std::sync::{Arc, Mutex};

    type Frames = Arc<Mutex<Vec<Message>>>;

    /// 送信されたフレームを記録する Sink
    fn recording_sink(
        frames: Frames,
    ) -> impl Sink<Message, Error = axum::Error> + Unpin + Send {
        Box::pin(sink::unfold(frames, |frames, message: Message| async move {
            frames.lock().unwrap().push(message);
            Ok::<_, axum::Error>(frames)
        }))
    }

    /// 常に失敗する Sink
    fn broken_sink() -> impl Sink<Message, Error = axum::Error> + Unpin + Send {
        Box::pin(sink::unfold((), |_, _message: Message| async move {
            Err::<(), _>(axum::Error::new(std::io::Error::other("connection reset")))
        }))
    }

    #[tokio::test]
    async fn test_send_writes_text_frame() {
        // テスト項目: ペイロードがテキストフレームとして送信される
        // given (前提条件):
        let frames: Frames = Arc::new(Mutex::new(Vec::new()));
        let (mut connection, _signal) = WebSocketConnection::new(recording_sink(frames.clone()));

        // when (操作):
        let result = connection.send(&Payload::from("new-room")).await;

        // then (期待する結果):
        assert!(result.is_ok());
        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 1);
        assert!(matches!(&frames[0], Message::Text(text) if text.as_str() == "new-room"));
    }

    #[tokio::test]
    async fn test_send_error_is_reported() {
        // テスト項目: Sink の送信失敗は ConnectionError::Send として返される
        // given (前提条件):
        let (mut connection, _signal) = WebSocketConnection::new(broken_sink());

        // when (操作):
        let result = connection.send(&Payload::from("new-chat")).await;

        // then (期待する結果):
        assert!(matches!(result, Err(ConnectionError::Send(_))));
    }

    #[tokio::test]
    async fn test_close_fires_signal_and_is_idempotent() {
        // テスト項目: close でクローズフレームが送られ close シグナルが発火し、2 回目の close は何もしない
        // given (前提条件):
        let frames: Frames = Arc::new(Mutex::new(Vec::new()));
        let (mut connection, signal) = WebSocketConnection::new(recording_sink(frames.clone()));

        // when (操作):
        connection.close().await;
        connection.close().await;
        let send_after_close = connection.send(&Payload::from("new-room")).await;

        // then (期待する結果):
        assert!(signal.await.is_ok());
        assert_eq!(send_after_close, Err(ConnectionError::Closed));
        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 1);
        assert!(matches!(frames[0], Message::Close(None)));
    }

    #[tokio::test]
    async fn test_close_on_broken_sink_does_not_fail() {
        // テスト項目: 相手がすでに切断していても close はパニックしない
        // given (前提条件):
        let (mut connection, signal) = WebSocketConnection::new(broken_sink());

        // when (操作):
        connection.close().await;

        // then (期待する結果):
        assert!(signal.await.is_ok());
    }
}
