//! Client Module
//!
//! This module contains the chat client proper: authentication, the HTTP
//! API calls, the chat view state, and the live-update transports.
//!
//! # Architecture
//!
//! The client is organized into focused submodules:
//!
//! - **`config`** - Configuration management (server URL, transport mode)
//! - **`error`** - Client error taxonomy
//! - **`session`** - In-memory session context and authentication state
//! - **`auth`** - Login/register API calls
//! - **`messages`** - Message fetch and send API calls
//! - **`view`** - Ordered, renderable chat view
//! - **`transport`** - Polling and WebSocket push transports
//! - **`chat`** - `ChatClient` facade tying the pieces together
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs       - Module exports and documentation
//! ├── config.rs    - Configuration management
//! ├── error.rs     - Error taxonomy
//! ├── session.rs   - Session context and auth state
//! ├── auth.rs      - Authentication API calls
//! ├── messages.rs  - Fetch/send API calls
//! ├── view.rs      - Chat view state
//! ├── chat.rs      - ChatClient facade
//! └── transport/   - Live-update transports (poll, push)
//! ```

pub mod auth;
pub mod chat;
pub mod config;
pub mod error;
pub mod messages;
pub mod session;
pub mod transport;
pub mod view;

// Re-export commonly used types
pub use auth::{authenticate, AuthMode};
pub use chat::ChatClient;
pub use config::Config;
pub use error::ClientError;
pub use messages::{fetch_messages, send_message};
pub use session::{AuthState, Session};
pub use transport::{ConnectionState, MessagePoller, NoReconnect, PushTransport, ReconnectHook};
pub use view::{ChatView, RenderedMessage};
