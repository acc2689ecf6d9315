//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;

/// Plain-text body returned for any rejected bookmark payload.
pub const INVALID_DATA: &str = "Invalid data";

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or wrong bearer token.
    Unauthorized,
    /// Resource not found.
    NotFound,
    /// Request payload failed validation.
    InvalidData,
    /// Internal server error.
    Internal(String),
}

/// Detail of a server error, attached to 500 responses as an extension.
///
/// The server-error formatter decides whether the detail reaches the client.
#[derive(Debug, Clone)]
pub struct ServerErrorDetail(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                axum::Json(serde_json::json!({ "error": "Unauthorized request" })),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                axum::Json(serde_json::json!({ "error": "404 Not Found" })),
            )
                .into_response(),
            ApiError::InvalidData => (StatusCode::BAD_REQUEST, INVALID_DATA).into_response(),
            ApiError::Internal(detail) => {
                let mut response = (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(serde_json::json!({ "error": { "message": "server error" } })),
                )
                    .into_response();
                response.extensions_mut().insert(ServerErrorDetail(detail));
                response
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Bookmark(_) => ApiError::InvalidData,
            DomainError::NotFound { .. } => ApiError::NotFound,
            DomainError::Store(_) => ApiError::Internal(err.to_string()),
        }
    }
}
