//! # API Error Types
//!
//! Request failures and their HTTP mapping.
//!
//! ```text
//! InvalidBody / InvalidPath / Validation  → 400
//! Database / Export                       → 500 (detail logged, not returned)
//! ```
//!
//! Not-found and duplicate outcomes are not errors at this layer. Handlers
//! answer those with a 200 message body before an `ApiError` is ever built.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use inventory_core::{ExportError, ValidationError};
use inventory_db::DbError;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Message returned to clients in place of storage details.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body is not valid JSON, lacks a field, or has the wrong content type
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Path id is not an integer
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    /// Payload decoded but failed a field rule
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::InvalidPath(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Database(_) | ApiError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the response body.
    fn public_message(&self) -> String {
        match self {
            ApiError::Database(_) | ApiError::Export(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: self.public_message(),
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidBody("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ValidationError::TooLong {
                field: "name".to_string(),
                max: 255,
            })
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DbError::PoolExhausted).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_detail_is_hidden() {
        let err = ApiError::from(DbError::QueryFailed("no such table: inventory".to_string()));
        assert_eq!(err.public_message(), INTERNAL_MESSAGE);

        let err = ApiError::InvalidPath("abc".to_string());
        assert!(err.public_message().contains("abc"));
    }
}
