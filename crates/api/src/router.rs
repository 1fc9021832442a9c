//! Shared application router builder.
//!
//! [`build_app_router`] is used by both the binary (`main.rs`) and the
//! integration tests (`tests/common/mod.rs`), so tests exercise the same
//! middleware stack as production.

use std::time::Duration;

use axum::http::{HeaderName, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. Set request ID on incoming requests
/// 2. Structured request/response tracing
/// 3. Propagate request ID to response
/// 4. Request timeout
/// 5. Panic recovery (catch panics, return 500)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::pages::router())
        // -- Middleware stack (applied bottom-up) --
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}
