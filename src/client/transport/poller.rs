//! # Polling Transport
//!
//! Interval-driven refresh of the message list. Every tick fetches the
//! full server-ordered list and replaces the chat view, for the lifetime
//! of the chat session.
//!
//! The refresh is unconditional: no backoff, no pause while idle, no
//! deduplication. A failed tick is logged and the loop keeps going;
//! overlapping slow fetches are not serialized, since each one replaces
//! the full list independently.

use crate::client::config::Config;
use crate::client::messages::fetch_messages;
use crate::client::view::ChatView;
use crate::client::error::ClientError;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Interval-driven message list refresher
#[derive(Debug, Default)]
pub struct MessagePoller {
    /// Whether the polling loop is active
    is_active: Arc<RwLock<bool>>,
    /// Worker task handle
    worker: Option<tokio::task::JoinHandle<()>>,
}

impl MessagePoller {
    /// Create a new, inactive poller
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the polling loop
    ///
    /// The first tick fires immediately, doubling as the initial load.
    pub async fn start(
        &mut self,
        http: reqwest::Client,
        config: Config,
        view: Arc<RwLock<ChatView>>,
    ) -> Result<(), ClientError> {
        if *self.is_active.read().await {
            return Err(ClientError::state("poller is already running"));
        }
        *self.is_active.write().await = true;

        let is_active = Arc::clone(&self.is_active);
        let period = config.poll_interval();

        let handle = tokio::spawn(async move {
            tracing::info!("[Poll] refreshing every {:?}", period);
            let mut ticker = tokio::time::interval(period);

            while *is_active.read().await {
                ticker.tick().await;
                match fetch_messages(&http, &config).await {
                    Ok(messages) => {
                        let count = messages.len();
                        view.write().await.replace_all(messages);
                        tracing::debug!("[Poll] refreshed {} messages", count);
                    }
                    Err(e) => {
                        tracing::warn!("[Poll] refresh failed: {}", e);
                    }
                }
            }

            tracing::info!("[Poll] loop stopped");
        });

        self.worker = Some(handle);
        Ok(())
    }

    /// Stop the polling loop
    pub async fn stop(&mut self) {
        *self.is_active.write().await = false;
        if let Some(handle) = self.worker.take() {
            // The worker may be mid-sleep on its ticker; there is nothing
            // to flush, so cut it down rather than waiting a full period.
            handle.abort();
        }
    }

    /// Whether the polling loop is currently active
    pub async fn is_running(&self) -> bool {
        *self.is_active.read().await
    }
}

impl Drop for MessagePoller {
    fn drop(&mut self) {
        if let Some(handle) = self.worker.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_poller_starts_inactive() {
        let poller = MessagePoller::new();
        assert!(!poller.is_running().await);
    }

    #[tokio::test]
    async fn test_poller_start_stop() {
        let mut poller = MessagePoller::new();
        let view = Arc::new(RwLock::new(ChatView::new()));

        poller
            .start(reqwest::Client::new(), Config::new(), Arc::clone(&view))
            .await
            .unwrap();
        assert!(poller.is_running().await);

        poller.stop().await;
        assert!(!poller.is_running().await);
    }

    #[tokio::test]
    async fn test_poller_rejects_double_start() {
        let mut poller = MessagePoller::new();
        let view = Arc::new(RwLock::new(ChatView::new()));

        poller
            .start(reqwest::Client::new(), Config::new(), Arc::clone(&view))
            .await
            .unwrap();
        let second = poller
            .start(reqwest::Client::new(), Config::new(), Arc::clone(&view))
            .await;
        assert!(matches!(second, Err(ClientError::State { .. })));

        poller.stop().await;
    }
}
