use thiserror::Error;

use crate::domain::UserId;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),
    #[error("{0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
