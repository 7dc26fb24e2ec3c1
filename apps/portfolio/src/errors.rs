use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::contact::{ContactError, FAILED_MESSAGE};
use crate::cv::{CvError, GENERATION_ALERT};
use crate::favicon::FaviconError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("CV generation error: {0}")]
    Generation(#[from] CvError),

    #[error("Contact form error: {0}")]
    Contact(#[from] ContactError),

    #[error("Contact form is not configured")]
    ContactUnavailable,

    #[error("Favicon error: {0}")]
    Favicon(#[from] FaviconError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Generation(e) => {
                tracing::error!("CV generation error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_ERROR",
                    GENERATION_ALERT.to_string(),
                )
            }
            AppError::Contact(e) => {
                tracing::warn!("Contact form error: {e}");
                (StatusCode::BAD_GATEWAY, "CONTACT_ERROR", FAILED_MESSAGE.to_string())
            }
            AppError::ContactUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "CONTACT_UNAVAILABLE",
                FAILED_MESSAGE.to_string(),
            ),
            AppError::Favicon(e) => {
                tracing::error!("Favicon error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "FAVICON_ERROR",
                    "Could not render the favicon".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
