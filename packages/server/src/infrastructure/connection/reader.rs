//! Per-connection reader task.
//!
//! The protocol is broadcast-only, so inbound frames are discarded. Reading
//! only serves to notice that the peer went away.

use axum::extract::ws::Message;
use futures_util::{Stream, StreamExt};
use tokio::task::JoinHandle;

use crate::infrastructure::hub::{ConnectionId, HubHandle};

use super::websocket::CloseSignal;

/// Why a reader task stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderExit {
    /// The peer sent a close frame or the stream ended.
    PeerClosed,
    /// Reading failed (network error, protocol violation).
    ReadError,
    /// The hub closed or dropped the connection first.
    Evicted,
}

/// Spawn the reader for a registered connection.
pub fn spawn_reader<S>(
    id: ConnectionId,
    stream: S,
    close_signal: CloseSignal,
    hub: HubHandle,
) -> JoinHandle<ReaderExit>
where
    S: Stream<Item = Result<Message, axum::Error>> + Unpin + Send + 'static,
{
    tokio::spawn(run_reader(id, stream, close_signal, hub))
}

/// Read until the connection ends, then ask the hub to unregister it.
///
/// No unregister is requested when the hub already closed the connection.
pub async fn run_reader<S>(
    id: ConnectionId,
    mut stream: S,
    mut close_signal: CloseSignal,
    hub: HubHandle,
) -> ReaderExit
where
    S: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    let exit = read_until_closed(id, &mut stream, &mut close_signal).await;

    if exit != ReaderExit::Evicted
        && let Err(e) = hub.unregister(id).await
    {
        tracing::warn!(connection_id = %id, "Failed to request unregistration: {}", e);
    }

    tracing::debug!(connection_id = %id, ?exit, "Reader task finished");
    exit
}

async fn read_until_closed<S>(
    id: ConnectionId,
    stream: &mut S,
    close_signal: &mut CloseSignal,
) -> ReaderExit
where
    S: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    loop {
        tokio::select! {
            biased;

            // Fires on close() and also when the connection is dropped.
            _ = &mut *close_signal => return ReaderExit::Evicted,

            frame = stream.next() => match frame {
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!(connection_id = %id, "Peer closed the connection");
                    return ReaderExit::PeerClosed;
                }
                Some(Ok(_)) => {
                    tracing::trace!(connection_id = %id, "Discarding inbound frame");
                }
                Some(Err(e)) => {
                    tracing::info!(connection_id = %id, "WebSocket read error: {}", e);
                    return ReaderExit::ReadError;
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::hub::{
        Hub, HubConfig,
        testing::{Behavior, Probe, recording},
    };
    use futures_util::stream;
    use tokio::sync::oneshot;

    async fn registered(hub: &HubHandle) -> (ConnectionId, Probe) {
        let id = ConnectionId::new();
        let (connection, probe) = recording(Behavior::Deliver);
        hub.register(id, connection).await.unwrap();
        (id, probe)
    }

    #[tokio::test]
    async fn test_read_error_requests_unregistration() {
        // テスト項目: 読み込みエラーで登録解除が要求され、接続が close される
        // given (前提条件):
        let (hub, _task) = Hub::spawn(HubConfig::default());
        let (id, probe) = registered(&hub).await;
        let frames = stream::iter(vec![
            Ok(Message::Text("hello".into())),
            Err(axum::Error::new(std::io::Error::other("connection reset"))),
        ]);
        let (_signal_tx, signal_rx) = oneshot::channel();

        // when (操作):
        let exit = spawn_reader(id, frames, signal_rx, hub.clone())
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(exit, ReaderExit::ReadError);
        assert_eq!(hub.connection_count().await.unwrap(), 0);
        assert_eq!(probe.close_count(), 1);
    }

    #[tokio::test]
    async fn test_close_frame_requests_unregistration() {
        // テスト項目: クローズフレームを受信すると登録解除が要求される
        // given (前提条件):
        let (hub, _task) = Hub::spawn(HubConfig::default());
        let (id, _probe) = registered(&hub).await;
        let frames = stream::iter(vec![
            Ok(Message::Ping(Vec::new().into())),
            Ok(Message::Close(None)),
        ])
        .chain(stream::pending());
        let (_signal_tx, signal_rx) = oneshot::channel();

        // when (操作):
        let exit = run_reader(id, frames, signal_rx, hub.clone()).await;

        // then (期待する結果):
        assert_eq!(exit, ReaderExit::PeerClosed);
        assert_eq!(hub.connection_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_end_of_stream_requests_unregistration() {
        // テスト項目: ストリームの終端で登録解除が要求される
        // given (前提条件):
        let (hub, _task) = Hub::spawn(HubConfig::default());
        let (id, _probe) = registered(&hub).await;
        let frames = stream::iter(Vec::<Result<Message, axum::Error>>::new());
        let (_signal_tx, signal_rx) = oneshot::channel();

        // when (操作):
        let exit = run_reader(id, frames, signal_rx, hub.clone()).await;

        // then (期待する結果):
        assert_eq!(exit, ReaderExit::PeerClosed);
        assert_eq!(hub.connection_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_close_signal_stops_reader_without_unregistration() {
        // テスト項目: Hub 側が先に close した場合、読み込みタスクは登録解除を要求せずに終了する
        // given (前提条件):
        let (hub, _task) = Hub::spawn(HubConfig::default());
        let (id, _probe) = registered(&hub).await;
        let frames = stream::pending::<Result<Message, axum::Error>>();
        let (signal_tx, signal_rx) = oneshot::channel();
        let reader = spawn_reader(id, frames, signal_rx, hub.clone());

        // when (操作):
        signal_tx.send(()).unwrap();
        let exit = reader.await.unwrap();

        // then (期待する結果):
        assert_eq!(exit, ReaderExit::Evicted);
        // The hub still tracks the connection because nobody asked it to forget it.
        assert_eq!(hub.connection_count().await.unwrap(), 1);
    }
}
