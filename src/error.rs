//! Error types for the CinemaMatch application.

use thiserror::Error;

/// Generic message shown for connection-level failures.
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error. Please try again.";

/// Generic message shown when a failure has no usable detail text.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to analyze movie. Please try again.";

/// Errors that can occur while calling the analysis service.
///
/// Every variant is terminal for the current search: the caller converts it
/// to the error view state and recovery is an explicit resubmission.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request URL could not be constructed
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
    /// The request never produced a response (refused, DNS, timeout)
    #[error("Request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status
    #[error("Service error (HTTP {status}): {detail}")]
    Service { status: u16, detail: String },
    /// The response body could not be decoded as the expected JSON shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// The message to display for this error.
    ///
    /// Transport failures, and service details that textually indicate a
    /// connection failure, collapse to [`CONNECTION_ERROR_MESSAGE`] rather
    /// than surfacing raw error text. Service-reported detail is shown
    /// verbatim otherwise. URL and decoding failures get the generic message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => CONNECTION_ERROR_MESSAGE.to_string(),
            ApiError::Service { detail, .. } if looks_like_connection_failure(detail) => {
                CONNECTION_ERROR_MESSAGE.to_string()
            }
            ApiError::Service { detail, .. } if !detail.trim().is_empty() => detail.clone(),
            ApiError::Service { .. } | ApiError::InvalidUrl(_) | ApiError::MalformedResponse(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Whether a service-provided detail string describes a connection-level
/// failure. The analysis service surfaces its own upstream retry machinery
/// in detail text as `RetryError` / `ConnectionError`.
pub fn looks_like_connection_failure(detail: &str) -> bool {
    detail.contains("RetryError") || detail.contains("ConnectionError")
}
