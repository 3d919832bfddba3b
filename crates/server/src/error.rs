//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-class errors to
//! Sentry before responding. All route handlers return `Result<T, AppError>`.
//! Error bodies are machine-readable JSON (`{"error": ..., "details": ...}`),
//! never a stack trace.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the catalog service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Store(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Keep store/internal details out of the response body; the Sentry
        // event carries the full error chain.
        let body = match &self {
            Self::Store(StoreError::Unavailable(_)) => json!({
                "error": "Failed to reach catalog store",
                "details": "store unavailable",
            }),
            Self::Store(_) | Self::Internal(_) => json!({
                "error": "Failed to process request",
                "details": "internal error",
            }),
            Self::BadRequest(msg) => json!({ "error": msg }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
