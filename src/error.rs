//! HTTP error type and the mapping from domain error kinds to status codes.
//!
//! Every failed request is answered with
//!
//! ```json
//! { "error": "Wrong username", "code": "validation_error" }
//! ```
//!
//! plus an optional `details` object. Store failures are logged here and
//! replaced by a fixed per-operation message; raw store errors never reach
//! the client.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::{LinkError, UserError};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
}

/// Error returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation error: {message}")]
    Validation { message: String, details: Value },

    #[error("not found: {message}")]
    NotFound { message: String, details: Value },

    #[error("conflict: {message}")]
    Conflict { message: String, details: Value },

    #[error("internal error: {message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the client-facing message.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        let body = ErrorBody {
            error: message,
            code,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "rejected request body");
        AppError::bad_request("Bad Request", Value::Null)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(ToString::to_string))
            .unwrap_or_else(|| "Bad Request".to_string());

        AppError::bad_request(message, Value::Null)
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailTaken => AppError::conflict("Email unavailable", Value::Null),
            UserError::UsernameTaken => AppError::conflict("Username unavailable", Value::Null),
            UserError::UserNotFound => AppError::not_found("User not found", Value::Null),
            UserError::AvailabilityCheckFailed { field, source } => {
                tracing::error!(error = %source, %field, "availability check failed");
                AppError::internal(format!("Unable to check {field} availability"), Value::Null)
            }
            UserError::CreateFailed(source) => {
                tracing::error!(error = %source, "user insert failed");
                AppError::internal("Error creating account", Value::Null)
            }
            UserError::FetchFailed(source) => {
                tracing::error!(error = %source, "user lookup failed");
                AppError::internal("Unable to fetch user", Value::Null)
            }
            UserError::DeleteFailed(source) => {
                tracing::error!(error = %source, "user delete failed");
                AppError::internal("Unable to remove user", Value::Null)
            }
        }
    }
}

impl From<LinkError> for AppError {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::NoLinksFound => AppError::not_found("No links found", Value::Null),
            LinkError::LinkNotFound => AppError::not_found("Link not found", Value::Null),
            LinkError::QueryFailed(source) => {
                tracing::error!(error = %source, "link query failed");
                AppError::internal("Error getting links", Value::Null)
            }
            LinkError::CreateFailed(source) => {
                tracing::error!(error = %source, "link insert failed");
                AppError::internal("Error creating link", Value::Null)
            }
            LinkError::UpdateFailed(source) => {
                tracing::error!(error = %source, "link update failed");
                AppError::internal("Error updating link", Value::Null)
            }
            LinkError::DeleteFailed(source) => {
                tracing::error!(error = %source, "link delete failed");
                AppError::internal("Error deleting link", Value::Null)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::UserField;
    use crate::domain::repositories::StoreError;

    fn store_failure() -> StoreError {
        StoreError::Database(sqlx::Error::PoolTimedOut)
    }

    #[test]
    fn test_user_error_status_mapping() {
        let cases = [
            (UserError::EmailTaken, StatusCode::CONFLICT, "Email unavailable"),
            (UserError::UsernameTaken, StatusCode::CONFLICT, "Username unavailable"),
            (UserError::UserNotFound, StatusCode::NOT_FOUND, "User not found"),
            (
                UserError::CreateFailed(store_failure()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error creating account",
            ),
            (
                UserError::FetchFailed(store_failure()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to fetch user",
            ),
            (
                UserError::DeleteFailed(store_failure()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to remove user",
            ),
        ];

        for (err, status, message) in cases {
            let app_err = AppError::from(err);
            assert_eq!(app_err.status(), status);
            assert_eq!(app_err.message(), message);
        }
    }

    #[test]
    fn test_availability_failure_names_field() {
        let app_err = AppError::from(UserError::AvailabilityCheckFailed {
            field: UserField::Email,
            source: store_failure(),
        });

        assert_eq!(app_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app_err.message(), "Unable to check Email availability");
    }

    #[test]
    fn test_link_error_status_mapping() {
        let cases = [
            (LinkError::NoLinksFound, StatusCode::NOT_FOUND, "No links found"),
            (LinkError::LinkNotFound, StatusCode::NOT_FOUND, "Link not found"),
            (
                LinkError::QueryFailed(store_failure()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error getting links",
            ),
            (
                LinkError::CreateFailed(store_failure()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error creating link",
            ),
            (
                LinkError::UpdateFailed(store_failure()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error updating link",
            ),
            (
                LinkError::DeleteFailed(store_failure()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error deleting link",
            ),
        ];

        for (err, status, message) in cases {
            let app_err = AppError::from(err);
            assert_eq!(app_err.status(), status);
            assert_eq!(app_err.message(), message);
        }
    }

    #[test]
    fn test_internal_message_does_not_leak_store_error() {
        let app_err = AppError::from(LinkError::QueryFailed(store_failure()));

        assert!(!app_err.message().contains("pool"));
    }

    #[test]
    fn test_error_response_status() {
        let response = AppError::bad_request("Wrong email", Value::Null).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
