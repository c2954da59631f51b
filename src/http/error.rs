//! Error type for HTTP handlers.
//!
//! Every failure leaves the service as `{"success": false, "error": "..."}`.
//! Server errors carry an optional source that is logged but never sent to
//! the caller.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::UserError;

pub const USER_NOT_FOUND: &str = "User not found";
pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Application error type for web handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    source: Option<anyhow::Error>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying failure for server-side logging.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn user_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, USER_NOT_FOUND)
    }

    pub fn route_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            match &self.source {
                Some(source) => tracing::error!(
                    status = %self.status,
                    error = %source,
                    "Error: request failed"
                ),
                None => tracing::error!(status = %self.status, "Error: request failed"),
            }
        }

        let body = ErrorBody {
            success: false,
            error: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => Self::user_not_found(),
            UserError::ValidationError(message) => Self::bad_request(message),
            other @ UserError::ActorCommunicationError(_) => {
                Self::internal().with_source(anyhow::Error::new(other))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::bad_request("Name and email are required");
        assert_eq!(err.to_string(), "[400] Name and email are required");
    }

    #[test]
    fn test_user_error_mapping() {
        let not_found = ApiError::from(UserError::NotFound(9));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.message(), USER_NOT_FOUND);

        let invalid = ApiError::from(UserError::ValidationError("bad".to_string()));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.message(), "bad");
    }

    #[test]
    fn test_internal_hides_source() {
        let err = ApiError::from(UserError::ActorCommunicationError(
            "Actor closed".to_string(),
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), INTERNAL_SERVER_ERROR);
        assert!(std::error::Error::source(&err).is_some());
    }
}
