use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Response bodies are a flat `{"error": message}` object; 5xx variants log
/// the full error server-side and surface the upstream message only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Reading not found")]
    NotFound,

    #[error("Already sent")]
    AlreadySent,

    #[error("Birth chart calculation failed: {0}")]
    Chart(String),

    #[error("AI report generation failed: {0}")]
    Llm(String),

    #[error("Failed to send email")]
    EmailSend,

    #[error(transparent)]
    Store(StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => AppError::NotFound,
            other => AppError::Store(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required field: {field}"),
            ),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Reading not found".to_string()),
            AppError::AlreadySent => (StatusCode::BAD_REQUEST, "Already sent".to_string()),
            AppError::Chart(msg) => {
                tracing::error!("Chart calculation error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Birth chart calculation failed: {msg}"),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("AI report generation failed: {msg}"),
                )
            }
            AppError::EmailSend => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to send email".to_string(),
            ),
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
