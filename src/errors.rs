// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use crate::db::StorageError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every variant renders as `{"error": "<message>"}` with the
/// status code below. Validation and lookups all happen before any mutation
/// is staged, so a 4xx never leaves partial changes behind.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Target, parent, or referenced entity does not exist
    #[error("Not found")]
    NotFound,

    /// Body missing, not declared as JSON, unparsable, or not a JSON object
    #[error("Not a JSON")]
    NotAJson,

    #[error("Missing {0}")]
    MissingField(&'static str),

    /// Field present with the wrong JSON type
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Known path, unsupported method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Body over the framework's payload limit
    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        if let ApiError::Storage(e) = self {
            log::error!("Storage failure: {}", e);
        }

        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::NotAJson => StatusCode::BAD_REQUEST,
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
