//! Chat Client Facade
//!
//! `ChatClient` is the session context object: it owns the configuration,
//! the shared HTTP client, the authenticated session, and the chat view,
//! and hands them to whichever live-update transport the configuration
//! selects. All mutable state lives behind locks so the facade can be
//! shared across the frontend and the transport tasks.

use crate::client::auth::{authenticate, AuthMode};
use crate::client::config::Config;
use crate::client::error::ClientError;
use crate::client::messages::{fetch_messages, send_message};
use crate::client::session::Session;
use crate::client::transport::{
    ConnectionState, MessagePoller, NoReconnect, PushTransport, ReconnectHook,
};
use crate::client::view::ChatView;
use crate::shared::config::TransportMode;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The chat session context
pub struct ChatClient {
    config: Config,
    http: reqwest::Client,
    session: RwLock<Session>,
    view: Arc<RwLock<ChatView>>,
    poller: RwLock<Option<MessagePoller>>,
    push: RwLock<Option<PushTransport>>,
}

impl ChatClient {
    /// Authenticate and build the session context
    pub async fn authenticate(
        config: Config,
        mode: AuthMode,
        username: &str,
        password: &str,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::new();
        let session = authenticate(&http, &config, mode, username, password).await?;
        Ok(Self::assemble(config, http, session))
    }

    /// Build a context around an existing session (used by tests)
    pub fn with_session(config: Config, session: Session) -> Self {
        Self::assemble(config, reqwest::Client::new(), session)
    }

    fn assemble(config: Config, http: reqwest::Client, session: Session) -> Self {
        Self {
            config,
            http,
            session: RwLock::new(session),
            view: Arc::new(RwLock::new(ChatView::new())),
            poller: RwLock::new(None),
            push: RwLock::new(None),
        }
    }

    /// Snapshot of the current session identity
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Change the display color used for subsequent sends
    pub async fn set_color(&self, color: impl Into<String>) {
        self.session.write().await.set_color(color);
    }

    /// Handle to the shared chat view
    pub fn view(&self) -> Arc<RwLock<ChatView>> {
        Arc::clone(&self.view)
    }

    /// Fetch the full message list and replace the view
    pub async fn refresh(&self) -> Result<(), ClientError> {
        let messages = fetch_messages(&self.http, &self.config).await?;
        self.view.write().await.replace_all(messages);
        Ok(())
    }

    /// Start the configured live-update transport
    pub async fn start_transport(&self) -> Result<(), ClientError> {
        self.start_transport_with_hook(Arc::new(NoReconnect)).await
    }

    /// Start the configured transport with an explicit reconnect hook
    /// (only meaningful in push mode)
    pub async fn start_transport_with_hook(
        &self,
        hook: Arc<dyn ReconnectHook>,
    ) -> Result<(), ClientError> {
        match self.config.transport() {
            TransportMode::Poll => {
                let mut slot = self.poller.write().await;
                if slot.is_some() {
                    return Err(ClientError::state("transport already started"));
                }
                let mut poller = MessagePoller::new();
                poller
                    .start(self.http.clone(), self.config.clone(), Arc::clone(&self.view))
                    .await?;
                *slot = Some(poller);
            }
            TransportMode::Push => {
                let mut slot = self.push.write().await;
                if slot.is_some() {
                    return Err(ClientError::state("transport already started"));
                }
                let transport =
                    PushTransport::connect(&self.config, Arc::clone(&self.view), hook).await?;
                *slot = Some(transport);
            }
        }
        Ok(())
    }

    /// State of the push channel; `Disconnected` when none was started
    pub async fn push_state(&self) -> ConnectionState {
        match self.push.read().await.as_ref() {
            Some(transport) => transport.state().await,
            None => ConnectionState::Disconnected,
        }
    }

    /// Submit user input as a chat message
    ///
    /// Input is trimmed; an empty result is a silent no-op. In polling
    /// mode an accepted send clears the input and triggers an immediate
    /// refresh. In push mode the frame goes out over the channel and the
    /// echo arrives through the broadcast; a send while the channel is not
    /// open is a silent no-op that leaves the input untouched.
    pub async fn submit(&self, input: &mut String) -> Result<(), ClientError> {
        let content = input.trim().to_string();
        if content.is_empty() {
            return Ok(());
        }

        match self.config.transport() {
            TransportMode::Poll => {
                let session = self.session.read().await.clone();
                if send_message(&self.http, &self.config, &session, &content).await? {
                    input.clear();
                    self.refresh().await?;
                }
            }
            TransportMode::Push => {
                let guard = self.push.read().await;
                match guard.as_ref() {
                    Some(transport) => {
                        let session = self.session.read().await.clone();
                        if transport.send(&session, &content).await {
                            input.clear();
                        }
                    }
                    None => {
                        tracing::debug!("[Chat] push channel not connected; message dropped");
                    }
                }
            }
        }
        Ok(())
    }

    /// Stop whichever transport is running and close the push channel
    pub async fn shutdown(&self) {
        if let Some(mut poller) = self.poller.write().await.take() {
            poller.stop().await;
        }
        if let Some(push) = self.push.write().await.take() {
            push.shutdown().await;
        }
    }
}
