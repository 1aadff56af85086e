use std::net::SocketAddr;

use claude_relay::config::RelayConfig;
use claude_relay::{build_app, AppState};
use reqwest::Client;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RelayConfig::from_env();
    if config.api_key.is_none() {
        // not fatal: requests will get a structured 500 until the key is set
        tracing::warn!("CLAUDE_API_KEY is not set");
    }

    let port = config.port;
    let state = AppState {
        http_client: Client::new(),
        config,
    };

    let app = build_app(state);

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind to port");
    tracing::info!(
        "listening on {}",
        listener.local_addr().expect("Failed to get local address")
    );
    axum::serve(listener, app).await.expect("Server failed");
}
