//! Chat View State
//!
//! The ordered, renderable message list shared between the live-update
//! transports and the frontend. Polling refreshes replace the whole list;
//! push delivery appends one entry per inbound frame. In both cases the
//! rendered order equals receipt order, with no client-side re-sorting.

use crate::shared::message::ChatMessage;
use chrono::{DateTime, Local, NaiveDateTime};

/// A message prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// Sender name
    pub username: String,
    /// Sender display color (hex string)
    pub color: String,
    /// Privileged-user marker
    pub is_admin: bool,
    /// Human-readable time derived from the wire timestamp
    pub time: String,
    /// Message body
    pub content: String,
}

impl RenderedMessage {
    /// Prepare a wire message for display
    pub fn from_wire(msg: &ChatMessage) -> Self {
        Self {
            username: msg.username.clone(),
            color: msg.color.clone(),
            is_admin: msg.is_admin,
            time: format_timestamp(&msg.timestamp),
            content: msg.content.clone(),
        }
    }

    /// Canonical display line: `name [time]: content`
    pub fn line(&self) -> String {
        format!("{} [{}]: {}", self.username, self.time, self.content)
    }

    /// Decode the display color into RGB, falling back to white
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(&self.color).unwrap_or((255, 255, 255))
    }
}

/// Derive a human-readable time from a wire timestamp
///
/// Accepts RFC 3339 (rendered in local time) and the naive ISO 8601 form
/// the backend emits (`2024-01-01T12:00:00.123456`, no offset). Anything
/// else, including an already-formatted `HH:MM:SS`, passes through as-is.
pub fn format_timestamp(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.with_timezone(&Local).format("%H:%M:%S").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%H:%M:%S").to_string();
    }
    timestamp.to_string()
}

/// Parse `#rgb` or `#rrggbb` into an RGB triple
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16));
            let r = digits.next()?? as u8;
            let g = digits.next()?? as u8;
            let b = digits.next()?? as u8;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Ordered, renderable message list
#[derive(Debug, Default)]
pub struct ChatView {
    messages: Vec<RenderedMessage>,
    scroll_to_bottom: bool,
}

impl ChatView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire list with a fresh server snapshot (polling refresh)
    pub fn replace_all(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages.iter().map(RenderedMessage::from_wire).collect();
        self.scroll_to_bottom = true;
    }

    /// Append exactly one message (push delivery)
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(RenderedMessage::from_wire(&message));
        self.scroll_to_bottom = true;
    }

    /// Rendered messages, oldest first
    pub fn messages(&self) -> &[RenderedMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Consume the pending scroll-to-newest request, if any
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_bottom)
    }
}
