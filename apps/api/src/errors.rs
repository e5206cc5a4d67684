use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every per-run error is surfaced verbatim as the response message and halts
/// that run only; the service stays up for the next attempt. Configuration
/// errors never reach this type — they abort startup in `main`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to read the resume document: {0}")]
    DocumentRead(String),

    #[error("Resume is not valid UTF-8 text: {0}")]
    Encoding(String),

    #[error("Failed to fetch the job posting: {0}")]
    Fetch(String),

    #[error("Failed to generate the cover letter: {0}")]
    Generation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::DocumentRead(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "DOCUMENT_READ_ERROR")
            }
            AppError::Encoding(_) => (StatusCode::UNPROCESSABLE_ENTITY, "ENCODING_ERROR"),
            AppError::Fetch(_) => (StatusCode::BAD_GATEWAY, "FETCH_ERROR"),
            AppError::Generation(_) => (StatusCode::BAD_GATEWAY, "GENERATION_ERROR"),
        };

        if status.is_server_error() {
            tracing::error!("{self}");
        }

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}
