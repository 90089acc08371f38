//! Query/Mutation RPC Module
//!
//! This module contains the JSON-RPC transport for the catalog and cart:
//! - Protocol models (JsonRpcRequest, params, constants)
//! - RPC helpers (success/error envelopes, RpcError)
//! - The dispatcher and its route

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types and functions
pub use handlers::{dispatch, routes};
pub use helpers::RpcError;
