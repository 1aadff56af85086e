use std::env;

pub const DEFAULT_CLAUDE_API_URL: &str = "https://api.anthropic.com/v1/messages";

// read once at startup and injected into the app state; the handler
// never touches the process environment itself
#[derive(Debug, Clone)]
pub struct RelayConfig {
    // None means "not configured": requests get a 500 instead of a crash
    pub api_key: Option<String>,
    pub api_url: String,
    pub port: u16,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        let api_key = env::var("CLAUDE_API_KEY").ok().filter(|key| !key.is_empty());

        let api_url = env::var("CLAUDE_API_URL")
            .unwrap_or_else(|_| DEFAULT_CLAUDE_API_URL.to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        Self { api_key, api_url, port }
    }
}
