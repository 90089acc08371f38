//! REST API handlers for shopping cart operations
//!
//! This module implements HTTP endpoints for listing the cart and for the
//! three cart mutations. The optional `x-cart-id` header selects the cart
//! scope; without it every request works on the default cart.

use super::{
    helpers::resolve_cart_scope,
    models::{RemovedResponse, UpdateQuantityInput},
    state::SharedState,
};
use crate::catalog::models::ProductId;
use crate::router::errors::{domain_error_response, json_error};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::warn;

/// Header naming the cart scope
pub const CART_ID_HEADER: &str = "x-cart-id";

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/cart", get(list_cart)).route(
        "/cart/items/:id",
        post(add_to_cart)
            .delete(remove_from_cart)
            .patch(update_quantity),
    )
}

fn cart_scope(headers: &HeaderMap) -> String {
    resolve_cart_scope(
        headers
            .get(CART_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
    )
}

fn parse_id(raw: &str) -> Result<ProductId, Response> {
    raw.parse::<ProductId>()
        .map_err(|e| json_error(StatusCode::BAD_REQUEST, "invalid_id", e.to_string()))
}

/// Endpoint: GET /cart
async fn list_cart(State(state): State<SharedState>, headers: HeaderMap) -> impl IntoResponse {
    let scope = cart_scope(&headers);
    Json(state.carts.list(&scope))
}

/// Endpoint: POST /cart/items/:id
/// Adds one unit of the product and returns the whole cart.
async fn add_to_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let scope = cart_scope(&headers);

    match state.carts.add(&scope, id) {
        Ok(cart) => Json(cart).into_response(),
        Err(e) => {
            warn!(cart = %scope, error = %e, "add to cart rejected");
            domain_error_response(e)
        }
    }
}

/// Endpoint: DELETE /cart/items/:id
async fn remove_from_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let scope = cart_scope(&headers);

    match state.carts.remove(&scope, id) {
        Ok(id) => Json(RemovedResponse { id }).into_response(),
        Err(e) => {
            warn!(cart = %scope, error = %e, "remove from cart rejected");
            domain_error_response(e)
        }
    }
}

/// Endpoint: PATCH /cart/items/:id
/// Body: `{ "change": "up" | "down" }`; any other or missing change is a no-op.
async fn update_quantity(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateQuantityInput>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let scope = cart_scope(&headers);

    match state.carts.update_quantity(&scope, id, payload.change) {
        Ok(entry) => Json(entry).into_response(),
        Err(e) => {
            warn!(cart = %scope, error = %e, "quantity update rejected");
            domain_error_response(e)
        }
    }
}
