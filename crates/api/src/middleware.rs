//! Cross-cutting HTTP middleware shared by every route.

use std::any::Any;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderName};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use crate::config::{Config, Environment};
use crate::error::{ApiError, ServerErrorDetail};

/// Rejects requests whose `Authorization` header does not carry the
/// configured bearer token.
pub async fn require_bearer_token(
    State(config): State<Arc<Config>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .is_some_and(|token| token_matches(token, &config.api_token));

    if !authorized {
        tracing::error!(path = %request.uri().path(), "unauthorized request");
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Extracts the token from a `Bearer <token>` header value.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| token.trim())
        .filter(|token| !token.is_empty())
}

fn token_matches(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Rewrites every 500 response according to the environment.
///
/// Production responses hide the error detail; other environments echo it.
pub async fn format_server_errors(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    if response.status() != StatusCode::INTERNAL_SERVER_ERROR {
        return response;
    }

    let detail = response
        .extensions()
        .get::<ServerErrorDetail>()
        .map(|d| d.0.clone())
        .unwrap_or_else(|| "internal server error".to_string());

    tracing::error!(
        method = %method,
        uri = %uri,
        error = %detail,
        "HTTP server error"
    );

    let body = if environment.is_production() {
        serde_json::json!({ "error": { "message": "server error" } })
    } else {
        serde_json::json!({ "message": detail, "error": { "message": detail } })
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Turns a handler panic into a 500 carrying the panic message.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::Internal(detail).into_response()
}

/// Headers added to every response unless a handler already set them.
pub fn security_headers() -> [(HeaderName, HeaderValue); 6] {
    [
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN")),
        (
            header::X_DNS_PREFETCH_CONTROL,
            HeaderValue::from_static("off"),
        ),
        (header::REFERRER_POLICY, HeaderValue::from_static("no-referrer")),
        (
            HeaderName::from_static("x-download-options"),
            HeaderValue::from_static("noopen"),
        ),
        (header::X_XSS_PROTECTION, HeaderValue::from_static("0")),
    ]
}
