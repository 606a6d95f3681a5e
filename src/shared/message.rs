//! Chat Message Data Structures
//!
//! Wire-level types exchanged with the chat backend. The backend emits
//! messages as JSON objects keyed by `username`, `color`, `content`,
//! `timestamp` and `is_admin`; some deployments use the older `author`
//! and `isPrivileged` keys, which are accepted as aliases on input.

use serde::{Deserialize, Serialize};

/// Display color applied whenever the backend omits or blanks one
pub const DEFAULT_COLOR: &str = "#ffffff";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// A single chat message as delivered by the backend
///
/// Messages are immutable once received. Ordering is server-assigned
/// (oldest first) and must be preserved when rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Name of the sender
    #[serde(alias = "author")]
    pub username: String,
    /// Display color of the sender (hex string)
    #[serde(default = "default_color")]
    pub color: String,
    /// Message body
    pub content: String,
    /// Server-assigned timestamp (RFC 3339 or naive ISO 8601)
    #[serde(default)]
    pub timestamp: String,
    /// Whether the sender holds elevated status
    #[serde(default, alias = "isPrivileged")]
    pub is_admin: bool,
}

impl ChatMessage {
    /// Create a message stamped with the current time
    pub fn new(username: impl Into<String>, content: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            color: color.into(),
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            is_admin: false,
        }
    }
}

/// Body of `POST /send`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub username: String,
    pub color: String,
    pub message: String,
}

/// Outbound WebSocket frame
///
/// The push channel carries `{username, content, color}`; the server echoes
/// the stored message back to every subscriber, including the sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundFrame {
    pub username: String,
    pub content: String,
    pub color: String,
}

/// Body of `POST /login` and `POST /register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

/// Authentication response from the backend
///
/// On success the body may carry the user's stored display color; on
/// rejection it may carry a human-readable `detail` message. Both fields
/// are optional so that either shape decodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthReply {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
