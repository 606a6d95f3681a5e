//! Configuration file loading tests

use michat::shared::config::{AppConfig, ConfigError, TransportMode};
use std::io::Write;

#[test]
fn test_loads_a_complete_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server_url = \"http://chat.example:8000\"").unwrap();
    writeln!(file, "transport = \"push\"").unwrap();
    writeln!(file, "poll_interval_secs = 2").unwrap();

    let config = AppConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.server_url.as_deref(), Some("http://chat.example:8000"));
    assert_eq!(config.transport, TransportMode::Push);
    assert_eq!(config.poll_interval_secs, 2);
}

#[test]
fn test_partial_config_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server_url = \"https://chat.example\"").unwrap();

    let config = AppConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.transport, TransportMode::Poll);
    assert_eq!(config.poll_interval_secs, 3);
}

#[test]
fn test_invalid_values_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "poll_interval_secs = 60").unwrap();
    assert!(matches!(
        AppConfig::load_from_file(file.path()),
        Err(ConfigError::InvalidInterval(60))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let path = std::path::Path::new("/nonexistent/michat.toml");
    assert!(matches!(
        AppConfig::load_from_file(path),
        Err(ConfigError::Io(_))
    ));
}
