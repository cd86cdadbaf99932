//! Error types for the query API.
//!
//! Interpreting a query never fails, so the errors here come from the HTTP
//! edge (malformed or non-JSON request bodies). Every error renders as a FHIR
//! OperationOutcome:
//!
//! | Error | HTTP Status | FHIR Issue Code |
//! |-------|-------------|-----------------|
//! | BadRequest | 400 | invalid |
//! | UnsupportedMediaType | 415 | not-supported |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Bad request - the body could not be decoded (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (code, details) = match &self {
            RestError::BadRequest { message } => ("invalid", message.clone()),
            RestError::UnsupportedMediaType { content_type } => (
                "not-supported",
                format!("Content type '{}' is not supported", content_type),
            ),
        };

        let operation_outcome = create_operation_outcome("error", code, &details);
        (self.status(), Json(operation_outcome)).into_response()
    }
}

/// Creates a FHIR OperationOutcome resource.
///
/// # Arguments
///
/// * `severity` - The issue severity (fatal, error, warning, information)
/// * `code` - The FHIR issue code
/// * `details` - Human-readable details
fn create_operation_outcome(severity: &str, code: &str, details: &str) -> serde_json::Value {
    serde_json::json!({
        "resourceType": "OperationOutcome",
        "issue": [{
            "severity": severity,
            "code": code,
            "details": {
                "text": details
            }
        }]
    })
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
