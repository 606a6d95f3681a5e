//! Application configuration module
//!
//! Provides the buildable configuration shared by the client and the
//! terminal frontend, including optional loading from a `michat.toml` file.

use serde::Deserialize;
use thiserror::Error;

/// Default polling refresh period in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 3;

/// Live-update transport selection
///
/// The two modes are mutually exclusive: a session runs either the polling
/// loop or the push channel, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Re-fetch and fully replace the message list on a fixed timer
    #[default]
    Poll,
    /// Receive individual messages over a persistent WebSocket connection
    Push,
}

impl TransportMode {
    /// Parse a mode name as used in config files and environment variables
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "poll" | "polling" => Some(Self::Poll),
            "push" | "ws" | "websocket" => Some(Self::Push),
            _ => None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server URL
    pub server_url: Option<String>,
    /// Live-update transport mode
    pub transport: TransportMode,
    /// Polling refresh period in seconds
    pub poll_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            transport: TransportMode::default(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

/// File representation of [`AppConfig`]; every key is optional
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    server_url: Option<String>,
    transport: Option<TransportMode>,
    poll_interval_secs: Option<u64>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: FileConfig = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let mut builder = Self::builder();
        if let Some(url) = raw.server_url {
            builder = builder.server_url(url);
        }
        if let Some(mode) = raw.transport {
            builder = builder.transport(mode);
        }
        if let Some(secs) = raw.poll_interval_secs {
            builder = builder.poll_interval_secs(secs);
        }
        builder.build()
    }

    /// Load a configuration from a TOML file on disk
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        // The backend has no change feed; refreshing faster than every 2s
        // only multiplies identical full-list fetches.
        if !(2..=3).contains(&self.poll_interval_secs) {
            return Err(ConfigError::InvalidInterval(self.poll_interval_secs));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    transport: Option<TransportMode>,
    poll_interval_secs: Option<u64>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the live-update transport mode
    pub fn transport(mut self, mode: TransportMode) -> Self {
        self.transport = Some(mode);
        self
    }

    /// Set the polling refresh period
    pub fn poll_interval_secs(mut self, secs: u64) -> Self {
        self.poll_interval_secs = Some(secs);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
            transport: self.transport.unwrap_or_default(),
            poll_interval_secs: self.poll_interval_secs.unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid poll interval: {0}s (expected 2-3s)")]
    InvalidInterval(u64),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("config read error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = AppConfig::builder().build().unwrap();
        assert!(config.server_url.is_none());
        assert_eq!(config.transport, TransportMode::Poll);
        assert_eq!(config.poll_interval_secs, DEFAULT_POLL_INTERVAL_SECS);
    }

    #[test]
    fn test_builder_rejects_bad_scheme() {
        let result = AppConfig::builder().server_url("ftp://example.com").build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_rejects_bad_interval() {
        let result = AppConfig::builder().poll_interval_secs(30).build();
        assert!(matches!(result, Err(ConfigError::InvalidInterval(30))));
    }

    #[test]
    fn test_from_toml_str() {
        let config = AppConfig::from_toml_str(
            "server_url = \"http://chat.example:8000\"\ntransport = \"push\"\npoll_interval_secs = 2\n",
        )
        .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://chat.example:8000"));
        assert_eq!(config.transport, TransportMode::Push);
        assert_eq!(config.poll_interval_secs, 2);
    }

    #[test]
    fn test_from_toml_str_rejects_garbage() {
        assert!(matches!(
            AppConfig::from_toml_str("server_url = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_transport_mode_parse() {
        assert_eq!(TransportMode::parse("poll"), Some(TransportMode::Poll));
        assert_eq!(TransportMode::parse("WebSocket"), Some(TransportMode::Push));
        assert_eq!(TransportMode::parse("carrier-pigeon"), None);
    }
}
