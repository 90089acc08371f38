//! RPC Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC envelopes and the
//! error type the dispatcher returns.

use super::models::{INVALID_PARAMS, METHOD_NOT_FOUND, NOT_FOUND};
use crate::error::DomainError;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;

/// Failure of a single RPC call, carried back in the error envelope.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl RpcError {
    pub fn code(&self) -> i32 {
        match self {
            Self::MethodNotFound(_) => METHOD_NOT_FOUND,
            Self::InvalidParams(_) => INVALID_PARAMS,
            Self::Domain(_) => NOT_FOUND,
        }
    }

    /// Structured detail for domain failures so clients need not parse text.
    pub fn data(&self) -> Option<Value> {
        match self {
            Self::Domain(e) => Some(json!({ "kind": e.kind(), "id": e.id() })),
            _ => None,
        }
    }

    pub fn into_envelope(self, id: Value) -> Value {
        let mut envelope = rpc_error(id, self.code(), self.to_string());
        if let Some(data) = self.data() {
            envelope["error"]["data"] = data;
        }
        envelope
    }
}

/// Decodes method params, treating absent params as an empty object.
pub fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T, RpcError> {
    let params = if params.is_null() { json!({}) } else { params };
    serde_json::from_value(params).map_err(|e| RpcError::InvalidParams(e.to_string()))
}

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}
