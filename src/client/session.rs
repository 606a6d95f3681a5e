//! Session Context
//!
//! In-memory identity established by a successful authentication. The
//! session lives for the lifetime of the process and is never persisted;
//! closing the client destroys it.

use crate::shared::DEFAULT_COLOR;

/// In-memory session identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Authenticated user name
    pub username: String,
    /// Display color used for outgoing messages (hex string)
    pub color: String,
}

impl Session {
    /// Create a session from an authenticated username and the color the
    /// server returned, defaulting to white when absent or blank
    pub fn new(username: impl Into<String>, color: Option<String>) -> Self {
        let color = color
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string());
        Self {
            username: username.into(),
            color,
        }
    }

    /// Change the display color for subsequent sends
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }
}

/// Authentication state driving the login/chat view switch
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub session: Option<Session>,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an authentication attempt as in flight
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a successful authentication; the login view is hidden and
    /// the chat view shown exactly once, on this transition
    pub fn complete(&mut self, session: Session) {
        self.loading = false;
        self.error = None;
        self.session = Some(session);
        self.authenticated = true;
    }

    /// Record a failed attempt with the message to surface
    pub fn fail(&mut self, error: impl Into<String>) {
        self.loading = false;
        self.error = Some(error.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
