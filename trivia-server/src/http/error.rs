//! API error types with IntoResponse
//!
//! Every error renders as `{"success": false, "error": <code>, "message": ...}`
//! with a fixed message per status. The detailed reason is only logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing input (400)
    BadRequest { reason: String },

    /// Missing entity or empty result (404)
    NotFound { reason: String },

    /// Wrong method on a known route (405)
    MethodNotAllowed,

    /// Operation failed while executing (422)
    Unprocessable { reason: String },

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed client-facing message for this status.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Bad request",
            Self::NotFound { .. } => "Resource Not Found",
            Self::MethodNotAllowed => "Method Not allowed",
            Self::Unprocessable { .. } => "Unable to process request",
            Self::Internal { .. } => "Internal server error",
        }
    }

    pub fn bad_request(reason: impl ToString) -> Self {
        Self::BadRequest {
            reason: reason.to_string(),
        }
    }

    pub fn not_found(reason: impl ToString) -> Self {
        Self::NotFound {
            reason: reason.to_string(),
        }
    }

    pub fn unprocessable(reason: impl ToString) -> Self {
        Self::Unprocessable {
            reason: reason.to_string(),
        }
    }

    /// Report a store failure as 422, logging the underlying cause.
    pub fn store_unprocessable(e: DbError) -> Self {
        tracing::error!("Database error: {}", e);
        Self::unprocessable(e)
    }

    /// Report a store failure as 404, logging the underlying cause.
    pub fn store_not_found(e: DbError) -> Self {
        tracing::error!("Database error: {}", e);
        Self::not_found(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
            Self::BadRequest { reason }
            | Self::NotFound { reason }
            | Self::Unprocessable { reason } => {
                tracing::debug!(status = self.status().as_u16(), "{}", reason)
            }
            Self::MethodNotAllowed => {}
        }

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message()
        });

        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound {
                reason: format!("{} '{}' not found", resource, id),
            },
            DbError::Sqlx(e) => Self::Internal {
                message: format!("database error: {}", e),
            },
        }
    }
}

impl From<ValidationError> for ApiError {
    /// Absent or blank fields are a bad request; values of the wrong kind
    /// fail later, like an insert would, and surface as 422.
    fn from(e: ValidationError) -> Self {
        tracing::debug!(field = e.field(), "request validation failed");
        match e {
            ValidationError::Missing { .. } | ValidationError::Empty { .. } => Self::bad_request(e),
            ValidationError::InvalidType { .. } => Self::unprocessable(e),
        }
    }
}
