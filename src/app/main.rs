/**
 * MiChat Terminal Client - Main Entry Point
 *
 * Prompts for credentials, establishes a session, starts the configured
 * live-update transport, and bridges stdin lines to the send path.
 */

use michat::app::terminal;
use michat::client::{AuthMode, AuthState, ChatClient, Config};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::load();
    tracing::info!("[Startup] server: {}", config.server_url());

    let client = login_loop(&config).await?;
    run_chat(client).await
}

/// Prompt until authentication succeeds; every failure is recoverable by
/// retyping, and each retry may switch between login and register
async fn login_loop(config: &Config) -> Result<ChatClient, Box<dyn std::error::Error>> {
    let mut auth = AuthState::new();
    loop {
        let choice = terminal::prompt_line("[l]ogin or [r]egister? ")?;
        let mode = if choice.trim().eq_ignore_ascii_case("r") {
            AuthMode::Register
        } else {
            AuthMode::Login
        };
        let username = terminal::prompt_line("username: ")?;
        let password = terminal::prompt_line("password: ")?;

        auth.begin();
        match ChatClient::authenticate(config.clone(), mode, &username, &password).await {
            Ok(client) => {
                auth.complete(client.session().await);
                println!("welcome, {}", username.trim());
                return Ok(client);
            }
            Err(e) => {
                auth.fail(e.user_message());
                if let Some(message) = &auth.error {
                    eprintln!("{}", message);
                }
            }
        }
    }
}

async fn run_chat(client: ChatClient) -> Result<(), Box<dyn std::error::Error>> {
    client.start_transport().await?;

    // Display task: print entries as they land in the shared view. A full
    // replace that shrank the list restarts the printout from the top.
    let view = client.view();
    let printer = tokio::spawn(async move {
        let mut printed = 0usize;
        loop {
            tokio::time::sleep(Duration::from_millis(250)).await;
            let mut guard = view.write().await;
            if guard.len() < printed {
                printed = 0;
            }
            // Scrollback terminals keep the newest line at the bottom, so
            // the scroll request only needs to be consumed.
            let _ = guard.take_scroll_request();
            for msg in &guard.messages()[printed..] {
                println!("{}", terminal::render_line(msg));
            }
            printed = guard.len();
        }
    });

    let client = Arc::new(client);
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(color) = line.strip_prefix("/color ") {
            client.set_color(color.trim().to_string()).await;
            continue;
        }
        let mut input = line;
        if let Err(e) = client.submit(&mut input).await {
            eprintln!("{}", e.user_message());
        }
    }

    printer.abort();
    client.shutdown().await;
    Ok(())
}
