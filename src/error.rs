//! Error types for the push API client.

use thiserror::Error;

/// Common `Result` type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that may occur while building or dispatching a push API call.
///
/// Argument and template errors are raised before any network I/O happens,
/// so a malformed path is never sent to the API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid argument: {0} must not be empty")]
    InvalidArgument(&'static str),

    #[error("Endpoint placeholder was never filled: {0}")]
    UnfilledPlaceholder(String),

    #[error("Error while building a URL: {0}")]
    ParseUrl(#[from] url::ParseError),

    #[error("Unable to serialize the request body")]
    SerializeBody(#[source] serde_json::Error),

    #[error("Error while connecting to the push API")]
    Connect(#[source] reqwest::Error),

    #[error("Push API request timed out")]
    RequestTimeout,

    #[error("Push API authentication error")]
    Authentication,

    #[error("Push API recipient no longer available")]
    NotFound,

    #[error("Push API error, {status}: {message}")]
    Upstream { status: String, message: String },

    #[error("Unable to deserialize the push API response")]
    DeserializeResponse(#[source] reqwest::Error),
}
