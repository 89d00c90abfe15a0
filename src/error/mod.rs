//! Application error type and its HTTP mapping.
//!
//! Every fallible path in the service returns [`AppError`] through the
//! [`Result`] alias. Handlers can return it directly; the [`IntoResponse`]
//! impl turns it into a JSON error body with the right status code, logging
//! server-side failures before they leave the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

// =====================================
// Result alias
// =====================================
pub type Result<T, E = AppError> = std::result::Result<T, E>;

// =====================================
// Error enum
// =====================================
#[derive(Debug, Error)]
pub enum AppError {
    // ----------------------------------------
    // Client errors (4xx)
    // ----------------------------------------
    /// 400
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// 422
    #[error("Validation error: {0}")]
    Validation(String),

    // ----------------------------------------
    // Server errors (5xx)
    // ----------------------------------------
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ----------------------------------------
    // Errors converted from libraries
    // ----------------------------------------
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,

            Self::Internal(_)
            | Self::Server(_)
            | Self::Config(_)
            | Self::Database(_)
            | Self::Migrate(_)
            | Self::Io(_)
            | Self::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Not-found error for a quote request looked up by request number.
    #[must_use]
    pub fn quote_not_found(request_number: &str) -> Self {
        Self::NotFound(format!(
            "Quote request '{}' not found",
            request_number
        ))
    }
}

// =====================================
// Error response DTO
// =====================================
/// JSON body returned for failed requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status_code = Some(status.as_u16());
        self
    }

}

// =====================================
// IntoResponse
// =====================================
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            error!(error = %self, "Server error occurred");
        }

        let status = self.status_code();

        // Internal detail stays in the log; clients get a generic line.
        let message = if self.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let error_response = ErrorResponse::new(
            status.canonical_reason().unwrap_or("Error"),
            message,
        )
        .with_status(status);

        (status, Json(error_response)).into_response()
    }
}

// =====================================
// From implementations
// =====================================
impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Internal(s)
    }
}

impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::Internal(s.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("test".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );

        assert_eq!(
            AppError::Validation("test".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        assert_eq!(
            AppError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response() {
        let response = ErrorResponse::new("NOT_FOUND", "Resource not found")
            .with_status(StatusCode::NOT_FOUND);

        assert_eq!(response.status_code, Some(404));
    }

    #[test]
    fn test_quote_not_found_message() {
        let err = AppError::quote_not_found("QR-ABC-1234");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("QR-ABC-1234"));
    }

    #[test]
    fn test_migrate_error_converts_to_app_error() {
        // The startup path propagates sqlx's migration error with `?`.
        fn assert_into_app_error<E: Into<AppError>>() {}
        assert_into_app_error::<sqlx::migrate::MigrateError>();
        assert_into_app_error::<sqlx::Error>();
    }
}
