//! Shared Module
//!
//! This module contains types and data structures that are shared across
//! the client modules. These types are used for serialization and
//! communication with the chat backend.
//!
//! # Overview
//!
//! The shared module provides the wire-level types spoken by the backend
//! (messages, authentication requests and replies) together with the
//! application configuration. All wire types are plain serde structs; the
//! backend assigns message order and the client never reinterprets it.

/// Wire-level message and authentication structures
pub mod message;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, TransportMode};
pub use error::SharedError;
pub use message::{AuthReply, AuthRequest, ChatMessage, OutboundFrame, SendMessageRequest, DEFAULT_COLOR};
