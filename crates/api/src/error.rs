use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use handyman_core::error::CoreError;
use handyman_watchman::RelayError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Validation and relay failures are part of the caller-facing contract and
/// are answered with HTTP 200 and an `{"error": ...}` body; callers inspect
/// the payload, not the status. Anything else is a broken request and gets
/// a 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `handyman_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The execution backend could not produce a result.
    #[error("Couldn't communicate with tasks runner: {0}")]
    Relay(#[from] RelayError),

    /// The request body could not be read.
    #[error("Couldn't read body: {0}")]
    BodyRead(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::Validation(_)) | AppError::Relay(_) => {
                (StatusCode::OK, json!({ "error": self.to_string() }))
            }
            AppError::BodyRead(msg) => {
                tracing::error!(error = %msg, "Couldn't read request body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "An internal error occurred",
                        "code": "INTERNAL_ERROR",
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
