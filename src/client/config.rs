use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError, TransportMode};
use std::time::Duration;

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Name of the optional configuration file looked up in the working directory
const CONFIG_FILE: &str = "michat.toml";

/// Client configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-built [`AppConfig`]
    pub fn from_app(app: AppConfig) -> Self {
        Self { app }
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self::from_app(builder.build()?))
    }

    /// Load configuration from `michat.toml` (if present) with environment
    /// overrides applied on top
    ///
    /// `MICHAT_SERVER_URL` overrides the server URL and `MICHAT_TRANSPORT`
    /// overrides the transport mode. An unreadable or invalid file falls
    /// back to defaults with a warning rather than aborting.
    pub fn load() -> Self {
        let path = std::path::Path::new(CONFIG_FILE);
        let mut app = if path.exists() {
            match AppConfig::load_from_file(path) {
                Ok(app) => app,
                Err(e) => {
                    tracing::warn!("[Config] ignoring {}: {}", CONFIG_FILE, e);
                    AppConfig::default()
                }
            }
        } else {
            AppConfig::default()
        };

        if let Ok(url) = std::env::var("MICHAT_SERVER_URL") {
            app.server_url = Some(url);
        }
        if let Ok(mode) = std::env::var("MICHAT_TRANSPORT") {
            match TransportMode::parse(&mode) {
                Some(mode) => app.transport = mode,
                None => tracing::warn!("[Config] unknown MICHAT_TRANSPORT value: {}", mode),
            }
        }

        Self { app }
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    /// Get the WebSocket endpoint URL derived from the server URL
    ///
    /// `http` maps to `ws` and `https` to `wss`, matching the scheme the
    /// page-origin derivation used in the browser client.
    pub fn ws_url(&self) -> String {
        let base = self.server_url().trim_end_matches('/');
        let ws_base = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{}", rest)
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{}", rest)
        } else {
            format!("ws://{}", base)
        };
        format!("{}/ws", ws_base)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Selected live-update transport mode
    pub fn transport(&self) -> TransportMode {
        self.app.transport
    }

    /// Polling refresh period
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.app.poll_interval_secs)
    }
}
