use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is terminal for the request: nothing is retried and no partial
/// result is returned.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(Method),

    #[error("Form error: {0}")]
    Form(String),

    #[error("Document extraction error: {0}")]
    Extraction(String),

    /// Carries the provider's own error text, which is returned to the client.
    #[error("{0}")]
    Llm(String),

    #[error("Detailed response content not found.")]
    EmptyCompletion,
}

const PREDICTION_FAILED: &str = "Prediction failed";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MethodNotAllowed(method) => {
                tracing::info!("Method {method} not allowed");
                (
                    StatusCode::METHOD_NOT_ALLOWED,
                    json!({ "message": self.to_string() }),
                )
            }
            AppError::Form(msg) | AppError::Extraction(msg) => {
                tracing::error!("{self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": PREDICTION_FAILED, "error": msg }),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": msg }),
                )
            }
            AppError::EmptyCompletion => {
                tracing::error!("LLM returned no usable content");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": self.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_method_not_allowed_names_method() {
        let (status, body) = render(AppError::MethodNotAllowed(Method::PUT)).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["message"], "Method PUT Not Allowed");
    }

    #[tokio::test]
    async fn test_form_error_carries_diagnostic() {
        let (status, body) = render(AppError::Form("stream truncated".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Prediction failed");
        assert_eq!(body["error"], "stream truncated");
    }

    #[tokio::test]
    async fn test_llm_error_surfaces_provider_text() {
        let (status, body) = render(AppError::Llm("API key not valid".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "API key not valid");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_empty_completion_has_distinct_message() {
        let (_, body) = render(AppError::EmptyCompletion).await;
        assert_eq!(body["message"], "Detailed response content not found.");
    }
}
