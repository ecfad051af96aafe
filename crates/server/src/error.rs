//! Unified error handling for the HTTP layer.
//!
//! Every body is JSON. Client errors carry a message (or a list of field
//! violations); server errors carry only a generic message, while the real
//! error is logged and sent to Sentry.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::{AdminServiceError, HashError, Violations};

/// Generic message for any 500.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Message for an unknown or malformed admin ID.
pub const ADMIN_NOT_FOUND: &str = "Admin not found";

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Payload failed field validation.
    #[error("Validation failed: {0}")]
    Validation(Violations),

    /// Write would break a uniqueness rule.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Password hashing failed.
    #[error("Hash error: {0}")]
    Hash(#[from] HashError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<AdminServiceError> for AppError {
    fn from(e: AdminServiceError) -> Self {
        match e {
            AdminServiceError::Validation(violations) => Self::Validation(violations),
            AdminServiceError::EmailTaken => Self::Conflict("Email already exists".to_string()),
            AdminServiceError::NotFound => Self::NotFound(ADMIN_NOT_FOUND.to_string()),
            AdminServiceError::Hash(e) => Self::Hash(e),
            AdminServiceError::Repository(e) => Self::Database(e),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        let message = match rejection {
            JsonRejection::MissingJsonContentType(_) => "Expected a JSON body",
            JsonRejection::JsonSyntaxError(_) => "Malformed JSON body",
            JsonRejection::JsonDataError(_) => "Fields must be strings",
            other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => "Request body too large",
            _ => "Unreadable request body",
        };
        Self::Validation(Violations::body(message))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log server errors with Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Admin request error"
            );
        }

        // Don't expose internal error details to clients
        let body = match self {
            Self::Validation(violations) => json!({ "errors": violations }),
            Self::Conflict(message) | Self::NotFound(message) => json!({ "message": message }),
            Self::Database(_) | Self::Hash(_) | Self::Internal(_) => {
                json!({ "message": SERVER_ERROR_MESSAGE })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Admin not found".to_string());
        assert_eq!(err.to_string(), "Not found: Admin not found");

        let err = AppError::Conflict("Email already exists".to_string());
        assert_eq!(err.to_string(), "Conflict: Email already exists");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::Validation(Violations::body("bad"))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Conflict("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Database(RepositoryError::DataCorruption(
                "test".to_string()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Hash(HashError::Hash("test".to_string()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_service_error_mapping() {
        assert!(matches!(
            AppError::from(AdminServiceError::EmailTaken),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(AdminServiceError::NotFound),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_server_error_body_is_generic() {
        let response = AppError::Internal("connection refused at 10.0.0.5".to_string())
            .into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "message": "Server error" }));
    }
}
