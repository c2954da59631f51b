use tokio::sync::oneshot;

use crate::domain::{User, UserCreate, UserId, UserPatch};
use crate::error::UserError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Messages understood by the user store actor. Each variant carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum UserRequest {
    ListUsers {
        respond_to: ServiceResponse<Vec<User>, UserError>,
    },
    GetUser {
        id: UserId,
        respond_to: ServiceResponse<Option<User>, UserError>,
    },
    CreateUser {
        user: UserCreate,
        respond_to: ServiceResponse<User, UserError>,
    },
    UpdateUser {
        id: UserId,
        patch: UserPatch,
        respond_to: ServiceResponse<User, UserError>,
    },
    DeleteUser {
        id: UserId,
        respond_to: ServiceResponse<User, UserError>,
    },
    Shutdown,
    #[cfg(test)]
    GetUserCount {
        respond_to: ServiceResponse<usize, UserError>,
    },
}
