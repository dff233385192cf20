//! Type-safe error codes for API responses.
//!
//! Single source of truth for the codes carried in every problem-detail
//! body. Each code has a string identifier for clients, an integer code for
//! monitoring, and a default human-readable message.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Invalid UUID format in a path or query parameter
    InvalidUuid,

    /// JSON extraction from the request body failed
    JsonExtraction,

    /// Query string extraction failed
    QueryExtraction,

    /// Requested route was not found
    NotFound,

    /// Request is semantically incorrect for the current resource state
    UnprocessableEntity,

    // Server errors (5000s)
    /// An unexpected internal server error occurred
    InternalError,
}

impl ErrorCode {
    /// String identifier, as serialized for clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidUuid => "INVALID_UUID",
            ErrorCode::JsonExtraction => "JSON_EXTRACTION",
            ErrorCode::QueryExtraction => "QUERY_EXTRACTION",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::InvalidUuid => 1002,
            ErrorCode::JsonExtraction => 1003,
            ErrorCode::NotFound => 1004,
            ErrorCode::UnprocessableEntity => 1005,
            ErrorCode::QueryExtraction => 1006,
            ErrorCode::InternalError => 5001,
        }
    }

    /// Default message used when the caller supplies none.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Request validation failed.",
            ErrorCode::InvalidUuid => "Invalid UUID format.",
            ErrorCode::JsonExtraction => "Invalid JSON in request body.",
            ErrorCode::QueryExtraction => "Invalid query parameters.",
            ErrorCode::NotFound => "Requested resource was not found.",
            ErrorCode::UnprocessableEntity => "Request could not be processed.",
            ErrorCode::InternalError => "An unexpected error occurred.",
        }
    }
}
