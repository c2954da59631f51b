//! HTTP request handlers.

pub mod meta;
pub mod users;

use super::error::ApiError;

/// Catch-all for any method and path without a route.
pub async fn route_not_found() -> ApiError {
    ApiError::route_not_found()
}
