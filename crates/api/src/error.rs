use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hotel_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hotel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request the server could not parse (bad JSON, bad path parameter).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    json!({ "error": core.to_string(), "code": "NOT_FOUND" }),
                ),
                CoreError::Validation(violations) => (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": "Validation failed",
                        "code": "VALIDATION_ERROR",
                        "violations": violations,
                    }),
                ),
                CoreError::Storage(msg) => {
                    tracing::error!(error = %msg, "Storage error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "error": INTERNAL_MESSAGE, "code": "INTERNAL_ERROR" }),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
