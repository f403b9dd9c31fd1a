use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

pub const MISSING_ROADMAP_FIELDS: &str = "Missing required fields: skill and approach";
pub const STRUCTURED_ROADMAP_FAILED: &str =
    "Failed to generate structured roadmap. Please try again.";
pub const ROADMAP_INTERNAL_ERROR: &str = "Internal server error while generating roadmap";
pub const EMPTY_PLAN_GOAL: &str = "Goal cannot be empty";
pub const EMPTY_PLAN_DURATION: &str = "Duration cannot be empty";
pub const PLAN_TOO_LONG: &str = "Duration cannot exceed 5 years";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as a flat `{ "error": "<message>" }` body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider could not produce output matching the roadmap schema.
    #[error("Schema conformance error: {0}")]
    SchemaConformance(String),

    /// Network, timeout or provider failure while generating a roadmap.
    #[error("Model invocation error: {0}")]
    Invocation(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// A request body axum refused to read, answered with axum's own status (e.g. 413).
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::Rejected {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl AppError {
    /// Splits a model failure into the schema-specific or generic variant.
    /// Classification is by message only: the provider layer tags schema failures
    /// with the phrase "structured output".
    pub fn from_model_failure(err: &LlmError) -> Self {
        let message = err.to_string();
        if message.contains("structured output") {
            AppError::SchemaConformance(message)
        } else {
            AppError::Invocation(message)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::SchemaConformance(msg) => {
                tracing::error!("Roadmap schema conformance failure: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    STRUCTURED_ROADMAP_FAILED.to_string(),
                )
            }
            AppError::Invocation(msg) => {
                tracing::error!("Roadmap model invocation failure: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ROADMAP_INTERNAL_ERROR.to_string(),
                )
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Resume scanner request failed".to_string(),
                )
            }
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            AppError::Rejected { status, message } => (*status, message.clone()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
