//! API error taxonomy.
//!
//! Three shapes reach the wire: 400 for validation failures, 404 for
//! unknown task ids, 500 for anything the store throws. Store detail is
//! written to the log only; the caller sees a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input field.
    #[error("{0}")]
    Validation(String),
    /// Operation referenced a nonexistent task id.
    #[error("{0}")]
    NotFound(String),
    /// Persistence-layer failure.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(id: i64) -> Self {
        Self::NotFound(format!("task {id} not found"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Store(err) => {
                tracing::error!(err = %err, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
