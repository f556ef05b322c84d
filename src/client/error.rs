// ABOUTME: Client error types for submission failures across transport, HTTP, and decoding
// ABOUTME: Construction-time message validation errors are wrapped so one error type covers a submission

use crate::messages::MessageError;
use thiserror::Error;

/// Error type for submission operations.
///
/// Per-part vendor rejections are not errors; they arrive as data in the
/// parsed [`SubmissionResponse`](crate::response::SubmissionResponse). This
/// type covers the failures that prevent a response from being obtained at
/// all.
#[derive(Debug, Error)]
pub enum SmsError {
    /// Network-level failure reaching the endpoint (DNS, TLS, timeout, ...)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered outside the 2xx range
    #[error("endpoint returned HTTP status {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The response body was not a parseable submission response
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The message failed construction-time validation
    #[error("invalid message: {0}")]
    InvalidMessage(#[from] MessageError),
}

/// Result type alias for submission operations
pub type SmsResult<T> = Result<T, SmsError>;
