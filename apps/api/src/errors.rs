use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pipeline::PipelineError;
use crate::schema::SchemaViolation;

/// The only thing a student is told when a model call fails.
pub const GENERATION_FAILURE_MESSAGE: &str =
    "Something went wrong while generating the AI response. Please try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] SchemaViolation),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::InputRejected { source, .. } => AppError::Validation(source),
            other => AppError::Generation(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            AppError::Validation(violation) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "One or more fields are invalid".to_string(),
                serde_json::to_value(&violation.violations).ok(),
            ),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone(), None),
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_ERROR",
                    GENERATION_FAILURE_MESSAGE.to_string(),
                    None,
                )
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

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["details"] = details;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

/// Body of an error response, for tests that inspect it.
#[cfg(test)]
pub async fn error_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice::<serde_json::Value>(&bytes).unwrap()["error"].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    #[tokio::test]
    async fn test_validation_lists_every_violation() {
        let err = AppError::Validation(SchemaViolation {
            violations: vec![
                crate::schema::FieldViolation::new("language", "must not be empty"),
                crate::schema::FieldViolation::new("query", "is required"),
            ],
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["details"][1]["path"], "query");
    }

    #[tokio::test]
    async fn test_generation_failure_hides_cause() {
        let err: AppError = PipelineError::Generation {
            pipeline: "chatbot",
            source: LlmError::Api {
                status: 401,
                message: "invalid x-api-key".to_string(),
            },
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = error_body(response).await;
        assert_eq!(body["code"], "GENERATION_ERROR");
        assert!(!body["message"].as_str().unwrap().contains("x-api-key"));
    }

    #[test]
    fn test_pipeline_input_rejection_is_a_validation_error() {
        let err: AppError = PipelineError::InputRejected {
            pipeline: "chatbot",
            source: SchemaViolation::single("query", "is required"),
        }
        .into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
