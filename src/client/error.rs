/**
 * Client Error Types
 *
 * This module defines the error taxonomy for the chat client. Every failure
 * class maps to a user-facing message; none of them abort the program.
 *
 * # Error Categories
 *
 * - `Shared` - validation failures (empty fields) raised before any
 *   network call is made
 * - `Rejected` - the server answered with a non-success status; the
 *   server-provided detail message is carried verbatim when present
 * - `Transport` - the request never completed (connection refused, DNS
 *   failure, dropped socket)
 * - `Decode` - the response body was not JSON or had an unexpected shape
 * - `Channel` - the WebSocket connect/handshake failed
 * - `State` - a lifecycle misuse, such as starting a transport twice
 */

use crate::shared::SharedError;
use thiserror::Error;

/// Fallback shown when a rejection carries no detail message
pub const FALLBACK_REJECTED: &str = "Request rejected by server.";
/// Shown when the request never completes
pub const MSG_UNREACHABLE: &str = "Server unreachable.";
/// Shown when a response body cannot be decoded
pub const MSG_MALFORMED: &str = "Malformed server response.";

/// Client-side error taxonomy
#[derive(Debug, Error)]
pub enum ClientError {
    /// Validation error raised before any network call
    #[error(transparent)]
    Shared(#[from] SharedError),

    /// Server answered with a non-success HTTP status
    #[error("server rejected request ({status}): {detail}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Server-provided detail, or a fallback message
        detail: String,
    },

    /// The request never completed
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded
    #[error("malformed server response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },

    /// WebSocket connect or handshake failure
    #[error("websocket channel error: {message}")]
    Channel {
        /// Human-readable error message
        message: String,
    },

    /// Lifecycle misuse (e.g. transport started twice)
    #[error("state error: {message}")]
    State {
        /// Human-readable error message
        message: String,
    },
}

impl ClientError {
    /// Create a validation error for a named input field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shared(SharedError::validation(field, message))
    }

    /// Create a rejection error from a status code and detail message
    pub fn rejected(status: u16, detail: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            detail: detail.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a channel error
    pub fn channel(message: impl Into<String>) -> Self {
        Self::Channel {
            message: message.into(),
        }
    }

    /// Create a state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// The message shown to the user for this error
    ///
    /// Server-provided detail is surfaced verbatim; transport and decode
    /// failures collapse to fixed fallback strings.
    pub fn user_message(&self) -> String {
        match self {
            Self::Shared(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::Shared(err) => err.to_string(),
            Self::Rejected { detail, .. } => detail.clone(),
            Self::Transport(_) => MSG_UNREACHABLE.to_string(),
            Self::Decode { .. } => MSG_MALFORMED.to_string(),
            Self::Channel { .. } => MSG_UNREACHABLE.to_string(),
            Self::State { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_surfaces_detail_verbatim() {
        let err = ClientError::rejected(401, "Invalid credentials");
        assert_eq!(err.user_message(), "Invalid credentials");
        assert!(format!("{}", err).contains("401"));
    }

    #[test]
    fn test_validation_surfaces_field_message() {
        let err = ClientError::validation("username", "Please enter a username and password.");
        assert_eq!(err.user_message(), "Please enter a username and password.");
    }

    #[test]
    fn test_decode_uses_fallback_message() {
        let err = ClientError::decode("expected object, got string");
        assert_eq!(err.user_message(), MSG_MALFORMED);
    }

    #[test]
    fn test_channel_maps_to_unreachable() {
        let err = ClientError::channel("connection refused");
        assert_eq!(err.user_message(), MSG_UNREACHABLE);
    }
}
