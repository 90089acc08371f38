//! Translation of domain failures into HTTP responses

use crate::error::DomainError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Both domain failures are "not found" class and map to 404.
pub fn domain_error_response(err: DomainError) -> Response {
    json_error(StatusCode::NOT_FOUND, err.kind(), err.to_string())
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
