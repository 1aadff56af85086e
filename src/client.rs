use axum::http::StatusCode;
use reqwest::Client;
use serde_json::Value;
use tracing::error;

use crate::error::RelayError;
use crate::models::{ClaudeRequest, ClaudeResponse, Message};

pub const CLAUDE_MODEL: &str = "claude-3-5-sonnet-20240620";
pub const MAX_TOKENS: u32 = 1024;
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

pub async fn call_claude(
    client: &Client,
    api_url: &str,
    api_key: &str,
    query: Value,
) -> Result<ClaudeResponse, RelayError> {
    let request = ClaudeRequest {
        model: CLAUDE_MODEL.to_string(),
        max_tokens: MAX_TOKENS,
        messages: vec![Message {
            role: "user".to_string(),
            content: query,
        }],
    };

    // single attempt, no retry; the transport default timeout applies
    let response = client
        .post(api_url)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let details = response.text().await?;
        error!("Claude API error: {details}");
        return Err(RelayError::Upstream {
            status: StatusCode::from_u16(status.as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            details,
        });
    }

    let body: ClaudeResponse = response.json().await?;
    Ok(body)
}
