//! Routing module for the product cart application

pub mod errors;

use crate::cart::state::SharedState;
use axum::{
    body::Body,
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState, request_timeout: Duration) -> Router {
    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .route("/health", get(health))
        .merge(crate::rpc::routes())
        .merge(crate::catalog::routes())
        .merge(crate::cart::routes())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(axum::middleware::from_fn(trace_requests))
        .layer(cors_layer)
        .with_state(state)
}

/// Endpoint: GET /health
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Middleware: wraps each request in a span tagged with a fresh request id
/// and echoes that id back to the client.
async fn trace_requests(req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().simple().to_string();
    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        uri = %req.uri(),
    );

    async move {
        let mut res = next.run(req).await;
        let status = res.status();
        if status.is_success() {
            info!(status = status.as_u16(), "request completed");
        } else {
            warn!(status = status.as_u16(), "request failed");
        }

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        res
    }
    .instrument(span)
    .await
}
