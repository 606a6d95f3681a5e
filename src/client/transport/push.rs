//! # Push Transport
//!
//! Persistent WebSocket connection to the backend's `/ws` endpoint. Each
//! inbound frame is one JSON-encoded message and is appended to the chat
//! view; outbound sends serialize `{username, content, color}` onto the
//! same connection. The server broadcasts stored messages back to every
//! subscriber, so a sent message reappears through the read side rather
//! than through a re-fetch.
//!
//! # Connection Lifecycle
//!
//! ```text
//! Disconnected -> Connecting -> Open -> Closed
//! ```
//!
//! `Disconnected` is the pre-connect default. [`PushTransport::connect`]
//! drives `Connecting -> Open` (or `Connecting -> Closed` on handshake
//! failure). Any close or error on the read side drives `Open -> Closed`,
//! logs the closure, and fires the [`ReconnectHook`]. There is no path
//! back to `Open` on the same connection; reconnection is a policy
//! decision left to the hook, and the default policy is to do nothing.

use crate::client::config::Config;
use crate::client::error::ClientError;
use crate::client::session::Session;
use crate::client::view::ChatView;
use crate::shared::message::{ChatMessage, OutboundFrame};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

/// Push channel connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection attempt has been made
    Disconnected,
    /// Handshake in progress
    Connecting,
    /// Frames flow in both directions
    Open,
    /// Terminal for this connection; a fresh connect is required
    Closed,
}

/// Seam for reconnection policy
///
/// Invoked exactly once when an established connection transitions to
/// `Closed`. Client-initiated shutdown does not fire the hook.
pub trait ReconnectHook: Send + Sync {
    fn on_closed(&self);
}

/// Default policy: log the closure and stay closed
#[derive(Debug, Default)]
pub struct NoReconnect;

impl ReconnectHook for NoReconnect {
    fn on_closed(&self) {
        tracing::info!("[Push] no reconnect policy installed; channel stays closed");
    }
}

/// Persistent WebSocket transport
pub struct PushTransport {
    state: Arc<RwLock<ConnectionState>>,
    outbound: mpsc::UnboundedSender<OutboundFrame>,
    reader: tokio::task::JoinHandle<()>,
    writer: tokio::task::JoinHandle<()>,
}

impl PushTransport {
    /// Open the push channel and start the read/write loops
    ///
    /// The server replays recent history as individual frames right after
    /// the handshake; the reader treats replayed and live messages
    /// identically, appending one view entry per frame.
    pub async fn connect(
        config: &Config,
        view: Arc<RwLock<ChatView>>,
        hook: Arc<dyn ReconnectHook>,
    ) -> Result<Self, ClientError> {
        let state = Arc::new(RwLock::new(ConnectionState::Connecting));
        let url = config.ws_url();
        tracing::info!("[Push] connecting to {}", url);

        let (socket, _) = match connect_async(url.as_str()).await {
            Ok(pair) => pair,
            Err(e) => {
                *state.write().await = ConnectionState::Closed;
                return Err(ClientError::channel(format!("connect {}: {}", url, e)));
            }
        };
        *state.write().await = ConnectionState::Open;
        tracing::info!("[Push] connected");

        let (mut sink, mut stream) = socket.split();
        let (outbound, mut pending) = mpsc::unbounded_channel::<OutboundFrame>();

        let writer = tokio::spawn(async move {
            while let Some(frame) = pending.recv().await {
                let text = match serde_json::to_string(&frame) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::error!("[Push] frame serialization failed: {}", e);
                        continue;
                    }
                };
                if let Err(e) = sink.send(Message::Text(text.into())).await {
                    tracing::warn!("[Push] send failed: {}", e);
                    break;
                }
            }
        });

        let reader_state = Arc::clone(&state);
        let reader = tokio::spawn(async move {
            while let Some(item) = stream.next().await {
                match item {
                    Ok(Message::Text(text)) => match serde_json::from_str::<ChatMessage>(text.as_str()) {
                        Ok(message) => view.write().await.append(message),
                        Err(e) => tracing::warn!("[Push] undecodable frame skipped: {}", e),
                    },
                    Ok(Message::Close(frame)) => {
                        tracing::info!("[Push] server closed the connection: {:?}", frame);
                        break;
                    }
                    // Ping/pong are answered by the protocol layer
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!("[Push] read error: {}", e);
                        break;
                    }
                }
            }
            *reader_state.write().await = ConnectionState::Closed;
            tracing::warn!("[Push] connection closed");
            hook.on_closed();
        });

        Ok(Self {
            state,
            outbound,
            reader,
            writer,
        })
    }

    /// Current connection state
    pub async fn state(&self) -> ConnectionState {
        *self.state.read().await
    }

    /// Send a message over the channel
    ///
    /// Content is trimmed; an empty result is a silent no-op, as is any
    /// send while the channel is not `Open`. Returns whether a frame was
    /// actually handed to the connection.
    pub async fn send(&self, session: &Session, content: &str) -> bool {
        let content = content.trim();
        if content.is_empty() {
            return false;
        }
        if *self.state.read().await != ConnectionState::Open {
            tracing::debug!("[Push] channel not open; dropping send");
            return false;
        }
        let frame = OutboundFrame {
            username: session.username.clone(),
            content: content.to_string(),
            color: session.color.clone(),
        };
        self.outbound.send(frame).is_ok()
    }

    /// Close the channel from the client side
    ///
    /// Does not fire the reconnect hook; the hook is reserved for closures
    /// the client did not ask for.
    pub async fn shutdown(&self) {
        self.reader.abort();
        self.writer.abort();
        let mut state = self.state.write().await;
        if *state != ConnectionState::Closed {
            *state = ConnectionState::Closed;
            tracing::info!("[Push] client shutdown");
        }
    }
}

impl Drop for PushTransport {
    fn drop(&mut self) {
        self.reader.abort();
        self.writer.abort();
    }
}
