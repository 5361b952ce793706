//! Error types for envelope_api

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use envelope_core::EvalError;
use serde::Serialize;
use thiserror::Error;

/// Service-level errors (startup and shutdown)
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server runtime error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// API-level errors returned to HTTP callers
#[derive(Debug, Error)]
pub enum ApiError {
    /// The evaluator rejected the request input
    #[error(transparent)]
    Evaluation(#[from] EvalError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            // Every evaluation failure is a client input error
            ApiError::Evaluation(e) => (StatusCode::BAD_REQUEST, e.error_code()),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_errors_are_bad_requests() {
        let response = ApiError::Evaluation(EvalError::unknown_material("Brick")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Evaluation(EvalError::unsupported_code_combination(
            "IECC2018", "4C", "mass wall",
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
