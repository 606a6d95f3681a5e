//! Authentication flow integration tests
//!
//! Exercise the session establisher against a mock HTTP backend: success
//! with and without a stored color, rejection detail handling, malformed
//! bodies, and transport failures.

use assert_matches::assert_matches;
use michat::client::error::{FALLBACK_REJECTED, MSG_MALFORMED, MSG_UNREACHABLE};
use michat::client::{authenticate, AuthMode, ClientError, Config};
use michat::shared::config::AppConfig;
use michat::shared::DEFAULT_COLOR;
use serde_json::json;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config::with_builder(AppConfig::builder().server_url(server.uri())).unwrap()
}

#[tokio::test]
async fn test_login_success_captures_color() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "alice", "password": "pw1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"color": "#ff0000"})))
        .expect(1)
        .mount(&server)
        .await;

    let http = reqwest::Client::new();
    let session = authenticate(&http, &config_for(&server), AuthMode::Login, "alice", "pw1")
        .await
        .unwrap();
    assert_eq!(session.username, "alice");
    assert_eq!(session.color, "#ff0000");
}

#[tokio::test]
async fn test_login_success_without_color_defaults_to_white() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let http = reqwest::Client::new();
    let session = authenticate(&http, &config_for(&server), AuthMode::Login, "alice", "pw1")
        .await
        .unwrap();
    assert_eq!(session.color, DEFAULT_COLOR);
}

#[tokio::test]
async fn test_register_hits_the_register_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"color": "#abcdef"})))
        .expect(1)
        .mount(&server)
        .await;

    let http = reqwest::Client::new();
    let session = authenticate(&http, &config_for(&server), AuthMode::Register, "newbie", "pw")
        .await
        .unwrap();
    assert_eq!(session.color, "#abcdef");
}

#[tokio::test]
async fn test_rejection_surfaces_server_detail_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})))
        .mount(&server)
        .await;

    let http = reqwest::Client::new();
    let err = authenticate(&http, &config_for(&server), AuthMode::Login, "alice", "wrong")
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Rejected { status: 401, ref detail } if detail == "Invalid credentials");
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[tokio::test]
async fn test_rejection_without_parsable_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let http = reqwest::Client::new();
    let err = authenticate(&http, &config_for(&server), AuthMode::Login, "alice", "pw1")
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Rejected { status: 500, ref detail } if detail == FALLBACK_REJECTED);
}

#[tokio::test]
async fn test_success_with_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let http = reqwest::Client::new();
    let err = authenticate(&http, &config_for(&server), AuthMode::Login, "alice", "pw1")
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Decode { .. });
    assert_eq!(err.user_message(), MSG_MALFORMED);
}

#[tokio::test]
async fn test_empty_fields_never_issue_a_request() {
    let server = MockServer::start().await;
    Mock::given(any()).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let http = reqwest::Client::new();
    let config = config_for(&server);

    assert_matches!(
        authenticate(&http, &config, AuthMode::Login, "", "pw").await,
        Err(ClientError::Shared(_))
    );
    assert_matches!(
        authenticate(&http, &config, AuthMode::Register, "alice", "   ").await,
        Err(ClientError::Shared(_))
    );
    // Mock expectations (zero requests) are verified when `server` drops.
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    // Bind and immediately drop a listener so the port is known-closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config =
        Config::with_builder(AppConfig::builder().server_url(format!("http://127.0.0.1:{}", port)))
            .unwrap();
    let http = reqwest::Client::new();
    let err = authenticate(&http, &config, AuthMode::Login, "alice", "pw1")
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Transport(_));
    assert_eq!(err.user_message(), MSG_UNREACHABLE);
}
