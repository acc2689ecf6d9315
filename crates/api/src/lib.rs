//! HTTP API server for the bookmarks service.
//!
//! Exposes list, get, create and delete endpoints over an in-memory bookmark
//! list, guarded by a static bearer token, with structured logging (tracing).

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use bookmark_store::{BookmarkStore, InMemoryBookmarkStore};
use domain::BookmarkService;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use config::Config;
use error::ApiError;
use routes::bookmarks::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: BookmarkStore + 'static>(state: Arc<AppState<S>>) -> Router {
    let config = state.config.clone();
    let environment = config.environment;

    let mut app = Router::new()
        .route("/bookmarks", get(routes::bookmarks::list::<S>))
        .route(
            "/bookmarks/{id}",
            get(routes::bookmarks::get::<S>).delete(routes::bookmarks::delete::<S>),
        )
        .route("/bookmark", post(routes::bookmarks::create::<S>))
        .fallback(not_found)
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(
            config,
            middleware::require_bearer_token,
        ))
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(axum::middleware::from_fn_with_state(
            environment,
            middleware::format_server_errors,
        ));

    for (name, value) in middleware::security_headers() {
        app = app.layer(SetResponseHeaderLayer::if_not_present(name, value));
    }

    app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http())
}

/// Creates application state over the given store.
pub fn create_state<S: BookmarkStore>(store: S, config: Config) -> Arc<AppState<S>> {
    Arc::new(AppState {
        bookmarks: BookmarkService::new(store),
        config: Arc::new(config),
    })
}

/// Creates application state over a fresh, empty in-memory store.
pub fn create_default_state(config: Config) -> Arc<AppState<InMemoryBookmarkStore>> {
    create_state(InMemoryBookmarkStore::new(), config)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
