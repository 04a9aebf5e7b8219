//! Error handling middleware.
//!
//! Not-found and failed-operation responses carry their message as a bare JSON
//! string. Request-shape failures use RFC 7807 problem details.

use std::collections::BTreeMap;
use std::error::Error as _;
use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blogpost_core::ServiceError;
use blogpost_shared::ErrorResponse;

/// Application-level error type that converts to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    InvalidBody(String),
    Validation(BTreeMap<String, Vec<String>>),
    Internal(String),
}

impl AppError {
    /// The 404 raised for a missing post.
    pub fn post_not_found(id: i32) -> Self {
        AppError::NotFound(format!("Blog Post with ID {id} not found."))
    }

    /// Classify a service failure. Anything but not-found becomes a 400
    /// carrying `failure` as its detail.
    pub fn service(err: ServiceError, failure: impl Into<String>) -> Self {
        match err {
            ServiceError::NotFound { id } => {
                tracing::warn!(id, "Blog post not found");
                AppError::post_not_found(id)
            }
            err @ ServiceError::Repository { .. } => {
                tracing::error!(
                    error = %err,
                    cause = ?err.source().map(ToString::to_string),
                    "Service error"
                );
                AppError::BadRequest(failure.into())
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::InvalidBody(msg) => write!(f, "Invalid body: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(message) | AppError::BadRequest(message) => {
                return HttpResponse::build(self.status_code()).json(message);
            }
            AppError::InvalidBody(detail) => ErrorResponse::bad_request(detail),
            AppError::Validation(errors) => ErrorResponse::validation(errors.clone()),
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
