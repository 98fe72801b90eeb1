use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("LLM error: {0}")]
    Llm(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({
                    "code": "METHOD_NOT_ALLOWED",
                    "message": "Method not allowed"
                }),
            ),
            AppError::Llm(detail) => {
                tracing::error!("LLM error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "code": "GENERATION_FAILED",
                        "message": "Error generating ads",
                        "error": detail
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
