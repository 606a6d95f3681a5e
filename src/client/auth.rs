/**
 * Authentication Module
 *
 * HTTP client functions for establishing a session against the `/login`
 * and `/register` endpoints.
 */

use crate::client::config::Config;
use crate::client::error::{ClientError, FALLBACK_REJECTED};
use crate::client::session::Session;
use crate::shared::message::{AuthReply, AuthRequest};
use reqwest::Client;

/// Which authentication endpoint to hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Existing account (`POST /login`)
    Login,
    /// New account (`POST /register`)
    Register,
}

impl AuthMode {
    /// Endpoint path for this mode
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }
}

/// Authenticate a user with username and password
///
/// Both fields are trimmed; an empty field fails validation before any
/// network call is made. On success the returned [`Session`] carries the
/// server-provided display color, defaulting to white when absent. On a
/// non-success status the server's `detail` message is surfaced when the
/// body parses, otherwise a fallback message is used.
pub async fn authenticate(
    http: &Client,
    config: &Config,
    mode: AuthMode,
    username: &str,
    password: &str,
) -> Result<Session, ClientError> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ClientError::validation(
            if username.is_empty() { "username" } else { "password" },
            "Please enter a username and password.",
        ));
    }

    let url = config.api_url(mode.path());
    let request = AuthRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    tracing::debug!("[Auth] {} as '{}' via {}", mode.path(), username, url);

    let response = http.post(&url).json(&request).send().await?;
    let status = response.status();

    if !status.is_success() {
        let detail = response
            .json::<AuthReply>()
            .await
            .ok()
            .and_then(|reply| reply.detail)
            .unwrap_or_else(|| FALLBACK_REJECTED.to_string());
        tracing::warn!("[Auth] rejected ({}): {}", status, detail);
        return Err(ClientError::rejected(status.as_u16(), detail));
    }

    let reply: AuthReply = response
        .json()
        .await
        .map_err(|e| ClientError::decode(format!("auth response: {}", e)))?;

    tracing::info!("[Auth] '{}' authenticated", username);
    Ok(Session::new(username, reply.color))
}
