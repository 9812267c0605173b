// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// Each variant maps to an HTTP status code and a JSON error body
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Request body parsed as JSON but did not match the expected shape
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    PayloadTooLarge(String),
}

impl TrackerError {
    fn code(&self) -> &'static str {
        match self {
            TrackerError::NotFound(_) => "NOT_FOUND",
            TrackerError::BadRequest(_) => "BAD_REQUEST",
            TrackerError::DatabaseError(_) => "DATABASE_ERROR",
            TrackerError::ValidationError(_) => "VALIDATION_ERROR",
            TrackerError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
        }
    }
}

/// Convert TrackerError to HTTP response
/// `detail` carries the message in the shape the mobile client reads;
/// `error` carries the structured form.
impl ResponseError for TrackerError {
    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        let body = json!({
            "detail": message,
            "error": {
                "code": self.code(),
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::NotFound(_) => StatusCode::NOT_FOUND,
            TrackerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            TrackerError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TrackerError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TrackerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}
