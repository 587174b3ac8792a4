//! Cross-cutting error mapping for the HTTP surface.
//!
//! Every handler returns `Result<_, ApiError>`; the `IntoResponse`
//! impl below is the only place errors become HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::upstream::UpstreamError;

/// Error of an HTTP handler.
#[derive(Debug)]
pub enum ApiError {
    /// The upstream answered with an error; its status and message are
    /// passed through unchanged.
    Upstream { status: StatusCode, message: String },

    /// Anything else: transport failure, malformed body, missing data.
    Internal(String),
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Api { status, message } => ApiError::Upstream { status, message },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Upstream { status, message } => (status, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        tracing::error!(status = %status, message = %message, "Request failed");
        (status, message).into_response()
    }
}
