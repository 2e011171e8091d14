use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::generator::GenerationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("The model returned no text")]
    EmptyModelOutput,

    #[error("The model output was not valid JSON")]
    ModelOutputNotJson { raw: String },

    #[error("LLM error: {0}")]
    Upstream(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::InvalidInput(msg) => AppError::Validation(msg),
            GenerationError::EmptyModelOutput => AppError::EmptyModelOutput,
            GenerationError::ModelOutputNotJson { raw } => AppError::ModelOutputNotJson { raw },
            GenerationError::Upstream(msg) => AppError::Upstream(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut raw = None;
        let (status, code, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            AppError::EmptyModelOutput => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "EMPTY_MODEL_OUTPUT",
                "The AI returned an empty response. Please try again.".to_string(),
            ),
            AppError::ModelOutputNotJson { raw: excerpt } => {
                tracing::warn!("Model output not JSON: {excerpt:?}");
                raw = Some(excerpt);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MODEL_OUTPUT_NOT_JSON",
                    "The AI response could not be parsed as JSON".to_string(),
                )
            }
            AppError::Upstream(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "LLM_ERROR", msg)
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(raw) = raw {
            body["raw"] = json!(raw);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn into_parts(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_input_is_400() {
        let (status, body) =
            into_parts(GenerationError::InvalidInput("No resume data".to_string()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No resume data");
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body.get("raw").is_none());
    }

    #[tokio::test]
    async fn test_not_json_carries_raw_excerpt() {
        let (status, body) = into_parts(
            GenerationError::ModelOutputNotJson {
                raw: "Sure! {not json".to_string(),
            }
            .into(),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "MODEL_OUTPUT_NOT_JSON");
        assert_eq!(body["raw"], "Sure! {not json");
    }

    #[tokio::test]
    async fn test_upstream_message_is_passed_through() {
        let (status, body) =
            into_parts(GenerationError::Upstream("invalid x-api-key".to_string()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "invalid x-api-key");
    }

    #[tokio::test]
    async fn test_not_found_is_404() {
        let (status, body) = into_parts(AppError::NotFound("No resume".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let (status, body) = into_parts(sqlx::Error::PoolTimedOut.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "DATABASE_ERROR");
        assert_eq!(body["error"], "A database error occurred");
    }

    #[tokio::test]
    async fn test_empty_output_is_500() {
        let (status, body) = into_parts(GenerationError::EmptyModelOutput.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "EMPTY_MODEL_OUTPUT");
    }
}
