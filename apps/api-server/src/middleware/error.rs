//! Error handling middleware - maps every failure to a status and JSON body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_core::error::{DomainError, FieldViolation};
use quill_shared::{ErrorResponse, FieldDetail};
use thiserror::Error;

use crate::config::Environment;

/// Message returned for internal errors in production.
const GENERIC_INTERNAL_MESSAGE: &str = "An internal server error occurred.";

/// Application-level error type returned by handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resource not found")]
    NotFound,

    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldViolation>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldViolation::new(field, message)])
    }

    /// Response body for this error in the given environment.
    pub fn body(&self, environment: Environment) -> ErrorResponse {
        match self {
            AppError::NotFound => ErrorResponse::not_found(),
            AppError::Validation(violations) => ErrorResponse::validation(
                violations
                    .iter()
                    .map(|v| FieldDetail {
                        field: v.field.clone(),
                        message: v.message.clone(),
                    })
                    .collect(),
            ),
            AppError::Internal(_) if environment.is_production() => {
                ErrorResponse::message(GENERIC_INTERNAL_MESSAGE)
            }
            AppError::Internal(detail) => ErrorResponse::message(detail.clone()),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }

        HttpResponse::build(status).json(self.body(Environment::current()))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound => AppError::NotFound,
            DomainError::Validation(violations) => AppError::Validation(violations),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
