//! Error types for the drug API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == API Error Enum ==
/// Errors surfaced to HTTP callers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No drug carries the requested barcode
    #[error("Drug not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Fetch Error Enum ==
/// Failures while retrieving or decoding the catalogue document.
///
/// These never reach HTTP callers; the record store logs them and records a
/// failed load.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// Local file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a JSON array of drug records
    #[error("Malformed document: {0}")]
    Parse(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let response = ApiError::NotFound("123".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_request_status() {
        let response = ApiError::InvalidRequest("blank".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Status(404).to_string(), "Unexpected HTTP status 404");

        let parse = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert!(FetchError::from(parse).to_string().starts_with("Malformed document"));
    }
}
