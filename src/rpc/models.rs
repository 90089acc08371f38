//! RPC Protocol Models and Constants
//!
//! Envelope and parameter types for the query/mutation endpoint. Method
//! names follow the catalog/cart schema: three queries and three mutations.

use crate::cart::models::QuantityChange;
use crate::catalog::models::ProductId;
use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// Constants
// =============================================================================

/// Query: every catalog product
pub const PRODUCTS_METHOD: &str = "products";
/// Query: one catalog product by id
pub const PRODUCT_METHOD: &str = "product";
/// Query: current cart contents
pub const CART_METHOD: &str = "cart";
/// Mutation: add one unit of a product
pub const ADD_PRODUCT_METHOD: &str = "addProductToCart";
/// Mutation: remove an entry entirely
pub const REMOVE_PRODUCT_METHOD: &str = "removeProductFromCart";
/// Mutation: nudge an entry's quantity up or down
pub const UPDATE_QUANTITY_METHOD: &str = "updateQuantity";
/// Liveness probe
pub const PING_METHOD: &str = "ping";

// JSON-RPC 2.0 error codes
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
/// Application-defined: the referenced product or cart item does not exist
pub const NOT_FOUND: i32 = -32004;

// =============================================================================
// Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

/// Params for methods that only need a cart scope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartParams {
    pub cart_id: Option<String>,
}

/// Params for methods addressing one product
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemParams {
    pub id: ProductId,

    pub cart_id: Option<String>,
}

/// Params for `updateQuantity`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityParams {
    pub id: ProductId,

    /// Missing or non-string changes leave the quantity alone
    #[serde(default)]
    pub change: QuantityChange,

    pub cart_id: Option<String>,
}
