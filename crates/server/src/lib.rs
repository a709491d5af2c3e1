//! Discount Allocator Server
//!
//! HTTP surface around the allocation engine.

pub mod http;
pub mod metrics;
pub mod state;
pub mod validate;

pub use http::create_router;
pub use metrics::{init_metrics, record_allocation, record_validation_failure};
pub use state::AppState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors surfaced as HTTP responses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request failed validation or named a degenerate input.
    #[error("{0}")]
    InvalidInput(String),

    /// Unexpected internal failure; the detail stays in the logs.
    #[error("Internal server error")]
    Internal(String),
}

/// JSON error body, matching the `{"error": "..."}` contract.
#[derive(Debug, serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let response = ApiError::InvalidInput("siteKitty must be a positive number".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500_without_detail() {
        let response = ApiError::Internal("engine panicked".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
