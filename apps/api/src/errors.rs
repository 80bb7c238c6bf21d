use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::GuidanceError;

/// Hint shown alongside upstream failures. The failure is terminal for the
/// request; whether to resubmit is the user's call.
const UPSTREAM_HINT: &str =
    "Please check your internet connection and API key, then try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Guidance error: {0}")]
    Guidance(#[from] GuidanceError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, hint) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            AppError::Guidance(err) => {
                tracing::error!("Guidance error: {err}");
                let code = match err {
                    GuidanceError::Network { .. } => "UPSTREAM_NETWORK_ERROR",
                    GuidanceError::Parse { .. } => "UPSTREAM_PARSE_ERROR",
                    GuidanceError::MalformedResponse { .. } => "UPSTREAM_MALFORMED_RESPONSE",
                };
                (StatusCode::BAD_GATEWAY, code, err.to_string(), Some(UPSTREAM_HINT))
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
                "hint": hint
            }
        }));

        (status, body).into_response()
    }
}
