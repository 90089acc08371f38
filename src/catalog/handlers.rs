//! REST API handlers for catalog queries

use super::models::ProductId;
use crate::cart::state::SharedState;
use crate::router::errors::{domain_error_response, json_error};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

/// Creates routes for catalog-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

/// Endpoint: GET /products
async fn list_products(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.catalog.list().to_vec())
}

/// Endpoint: GET /products/:id
async fn get_product(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, "invalid_id", e.to_string()),
    };

    match state.catalog.lookup(id) {
        Ok(product) => Json(product.clone()).into_response(),
        Err(e) => domain_error_response(e),
    }
}
