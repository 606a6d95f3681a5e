//! Message API Calls
//!
//! HTTP client functions for retrieving the message list and submitting
//! new messages in polling mode.

use crate::client::config::Config;
use crate::client::error::ClientError;
use crate::client::session::Session;
use crate::shared::message::{ChatMessage, SendMessageRequest};
use reqwest::Client;

/// Retrieve the full, server-ordered message list
///
/// Idempotent and side-effect-free; repeated calls simply return the same
/// or an updated list. Order is preserved verbatim.
pub async fn fetch_messages(http: &Client, config: &Config) -> Result<Vec<ChatMessage>, ClientError> {
    let response = http.get(config.api_url("/messages")).send().await?;
    let status = response.status();

    if !status.is_success() {
        let detail = response.text().await.unwrap_or_else(|_| status.to_string());
        return Err(ClientError::rejected(status.as_u16(), detail));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::decode(format!("message list: {}", e)))
}

/// Submit a message via `POST /send`
///
/// Content is trimmed; an empty result is a silent no-op that issues no
/// network call and returns `Ok(false)`. Returns `Ok(true)` when the
/// server accepted the message.
pub async fn send_message(
    http: &Client,
    config: &Config,
    session: &Session,
    content: &str,
) -> Result<bool, ClientError> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(false);
    }

    let request = SendMessageRequest {
        username: session.username.clone(),
        color: session.color.clone(),
        message: content.to_string(),
    };

    let response = http.post(config.api_url("/send")).json(&request).send().await?;
    let status = response.status();

    if !status.is_success() {
        let detail = response.text().await.unwrap_or_else(|_| status.to_string());
        tracing::warn!("[Send] rejected ({}): {}", status, detail);
        return Err(ClientError::rejected(status.as_u16(), detail));
    }

    Ok(true)
}
