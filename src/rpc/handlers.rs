//! Query/mutation route handlers
//!
//! A single JSON-RPC endpoint exposes the catalog queries and the cart
//! mutations. `dispatch` is public so the method table can be exercised
//! without going through HTTP.

use super::{helpers::*, models::*};
use crate::cart::{helpers::resolve_cart_scope, state::*};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Creates routes for the query/mutation endpoint
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_rpc))
        .route("/rpc", post(handle_rpc))
}

/// Endpoint: POST /rpc
async fn handle_rpc(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!(error = %e.body_text(), "rejected malformed rpc request");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let params = req.params.unwrap_or(Value::Null);
    debug!(method = %req.method, ?id, "rpc call");

    let response_body = match dispatch(&state, &req.method, params) {
        Ok(result) => rpc_success(id, result),
        Err(e) => {
            warn!(method = %req.method, code = e.code(), error = %e, "rpc call failed");
            e.into_envelope(id)
        }
    };

    Json(response_body).into_response()
}

/// Routes one call to the catalog or the addressed cart.
pub fn dispatch(state: &AppState, method: &str, params: Value) -> Result<Value, RpcError> {
    match method {
        PRODUCTS_METHOD => Ok(json!(state.catalog.list())),
        PRODUCT_METHOD => {
            let input: ItemParams = parse_params(params)?;
            Ok(json!(state.catalog.lookup(input.id)?))
        }
        CART_METHOD => {
            let input: CartParams = parse_params(params)?;
            let scope = resolve_cart_scope(input.cart_id.as_deref());
            Ok(json!(state.carts.list(&scope)))
        }
        ADD_PRODUCT_METHOD => {
            let input: ItemParams = parse_params(params)?;
            let scope = resolve_cart_scope(input.cart_id.as_deref());
            Ok(json!(state.carts.add(&scope, input.id)?))
        }
        REMOVE_PRODUCT_METHOD => {
            let input: ItemParams = parse_params(params)?;
            let scope = resolve_cart_scope(input.cart_id.as_deref());
            Ok(json!(state.carts.remove(&scope, input.id)?))
        }
        UPDATE_QUANTITY_METHOD => {
            let input: UpdateQuantityParams = parse_params(params)?;
            let scope = resolve_cart_scope(input.cart_id.as_deref());
            Ok(json!(state
                .carts
                .update_quantity(&scope, input.id, input.change)?))
        }
        PING_METHOD => Ok(json!({})),
        other => Err(RpcError::MethodNotFound(other.to_string())),
    }
}
