use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::info;

use crate::client::call_claude;
use crate::error::RelayError;
use crate::models::{AskRequest, AskResponse};
use crate::AppState;

// applied around the whole router so every response, including
// errors, is retrievable by a cross-origin caller
pub async fn apply_cors(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

// the route accepts any method so the method gate (and its JSON 405
// body) stays under our control rather than axum's default
pub async fn ask(State(state): State<AppState>, request: Request) -> Response {
    match handle_ask(state, request).await {
        Ok(response) => response,
        Err(error) => error.into_response(),
    }
}

async fn handle_ask(state: AppState, request: Request) -> Result<Response, RelayError> {
    // preflight: empty 200, headers come from the cors layer
    if request.method() == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    if request.method() != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }

    let body = read_body(request.into_body()).await?;
    let ask: AskRequest =
        serde_json::from_slice(&body).map_err(|e| RelayError::Internal(e.to_string()))?;
    let query = ask.into_query().ok_or(RelayError::MissingQuery)?;

    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(RelayError::ApiKeyMissing)?;

    info!("Calling Claude API with query: {}...", query_preview(&query));

    let upstream = call_claude(&state.http_client, &state.config.api_url, api_key, query).await?;
    info!("Claude API success");

    let answer = upstream
        .answer_text()
        .unwrap_or("No response from Claude")
        .to_string();

    Ok((
        StatusCode::OK,
        Json(AskResponse {
            answer,
            usage: upstream.usage,
        }),
    )
        .into_response())
}

async fn read_body(body: Body) -> Result<axum::body::Bytes, RelayError> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| RelayError::Internal(e.to_string()))
}

// first 50 characters only, queries can be long
fn query_preview(query: &Value) -> String {
    let text = match query {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    text.chars().take(50).collect()
}
