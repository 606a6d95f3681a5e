//! Live-Update Transports
//!
//! Two mutually-exclusive strategies keep the chat view current:
//!
//! - **`poller`** - re-fetch the full message list on a fixed timer and
//!   replace the view wholesale
//! - **`push`** - hold a persistent WebSocket connection and append each
//!   inbound frame to the view
//!
//! Exactly one transport is active per session, selected by
//! [`TransportMode`](crate::shared::config::TransportMode).

pub mod poller;
pub mod push;

pub use poller::MessagePoller;
pub use push::{ConnectionState, NoReconnect, PushTransport, ReconnectHook};
