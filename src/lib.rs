//! MiChat - Main Library
//!
//! MiChat is the client side of a small multi-user chat application. It
//! authenticates a user against the chat backend, keeps an ordered message
//! list current, and submits new messages either over plain HTTP polling or
//! over a persistent WebSocket connection.
//!
//! # Overview
//!
//! This library provides the core functionality for the MiChat client:
//! - Session establishment via the `/login` and `/register` endpoints
//! - Message fetching (`GET /messages`) and sending (`POST /send`)
//! - A live-update transport layer with two mutually-exclusive modes:
//!   interval polling and WebSocket push
//! - An ordered, renderable chat view shared between the transports and
//!   the terminal frontend
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between the client modules
//!   - Wire-level message and authentication structures
//!   - Application configuration with builder and TOML loading
//!   - Error types
//!
//! - **`client`** - Client logic
//!   - Authentication and session context
//!   - HTTP API calls for fetching and sending messages
//!   - Chat view state (ordered message list, scroll tracking)
//!   - Polling and WebSocket push transports
//!
//! - **`app`** - Terminal frontend
//!   - Login prompt and credential handling
//!   - ANSI rendering of the chat view
//!
//! # Usage
//!
//! ```rust,no_run
//! use michat::client::{AuthMode, ChatClient, Config};
//!
//! # async fn example() -> Result<(), michat::client::ClientError> {
//! let config = Config::load();
//! let client = ChatClient::authenticate(config, AuthMode::Login, "alice", "pw1").await?;
//! client.start_transport().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! All shared state lives behind `Arc<tokio::sync::RwLock<>>`. Transports run
//! as background tasks spawned on the tokio runtime; the chat view is the
//! single point of contact between a transport and the frontend.
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - Custom error types in `shared::error` and `client::error`
//! - No error is fatal: every failure surfaces as a value the caller can
//!   recover from

/// Shared types and data structures
pub mod shared;

/// Client logic (auth, messages, view, transports)
pub mod client;

/// Terminal frontend helpers
pub mod app;
