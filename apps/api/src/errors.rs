use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::analyzer::AnalysisError;
use crate::screen::ScreenBusy;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Busy(#[from] ScreenBusy),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}

/// Malformed bodies (bad JSON, missing fields, negative years) are reported
/// as validation errors.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Busy(e) => (StatusCode::CONFLICT, "ANALYSIS_IN_PROGRESS", e.to_string()),
            AppError::Analysis(e @ AnalysisError::Configuration(_)) => {
                tracing::error!("Configuration error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    e.user_message(),
                )
            }
            AppError::Analysis(e) => {
                tracing::error!("Candidate analysis failed: {e}");
                (StatusCode::BAD_GATEWAY, "ANALYSIS_ERROR", e.user_message())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
