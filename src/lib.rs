pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::middleware;
use axum::routing::any;
use axum::Router;
use reqwest::Client;

use config::RelayConfig;

// shared with all handlers; the http client is shared to avoid
// creating a new connection pool for every request
#[derive(Clone)]
pub struct AppState {
    pub http_client: Client,
    pub config: RelayConfig,
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/ask", any(handlers::ask))
        .layer(middleware::from_fn(handlers::apply_cors))
        .with_state(state)
}
