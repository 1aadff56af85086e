use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

// every failure the handler can hit maps to exactly one of these,
// so each request yields exactly one well-formed JSON response
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Only POST requests allowed")]
    MethodNotAllowed,

    #[error("Missing query in request body")]
    MissingQuery,

    #[error("API key not configured")]
    ApiKeyMissing,

    // upstream status is passed through unchanged, body text attached
    #[error("Claude API failed ({status}): {details}")]
    Upstream { status: StatusCode, details: String },

    #[error("Server error: {0}")]
    Internal(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            RelayError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Only POST requests allowed" }),
            ),
            RelayError::MissingQuery => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing query in request body" }),
            ),
            RelayError::ApiKeyMissing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "API key not configured" }),
            ),
            RelayError::Upstream { status, details } => (
                status,
                json!({ "error": "Claude API failed", "details": details }),
            ),
            RelayError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Server error", "message": message }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Internal(err.to_string())
    }
}
