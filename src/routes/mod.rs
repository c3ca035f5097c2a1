//! HTTP route handlers.
//!
//! Three fixed paths are served: the greeting at `/`, the liveness probe at
//! `/health`, and server counters at `/status`. Anything else falls through
//! to axum's default 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;
pub mod status;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and response headers.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .route("/status", get(status::status))
        .with_state(state.clone())
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    let router = if state.config.http.enable_cors {
        tracing::info!("CORS enabled for all origins");
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    // Request ID middleware - creates root span with request_id for correlation
    router.layer(middleware::from_fn_with_state(state, request_id_layer))
}
