use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{User, UserCreate, UserId, UserPatch};
use crate::error::UserError;
use crate::messages::UserRequest;

/// Client for the user store actor. Cheap to clone; every clone shares the
/// same mailbox.
#[derive(Clone)]
pub struct UserClient {
    sender: mpsc::Sender<UserRequest>,
}

impl UserClient {
    pub fn new(sender: mpsc::Sender<UserRequest>) -> Self {
        Self { sender }
    }

    /// No reply is expected; the actor exits its loop on receipt.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), UserError> {
        debug!("Sending shutdown request");
        self.sender
            .send(UserRequest::Shutdown)
            .await
            .map_err(|e| UserError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(UserClient => fn list_users() -> Vec<User> as UserRequest::ListUsers, Error = UserError);
client_method!(UserClient => fn get_user(id: UserId) -> Option<User> as UserRequest::GetUser, Error = UserError);
client_method!(UserClient => fn create_user(user: UserCreate) -> User as UserRequest::CreateUser, Error = UserError);
client_method!(UserClient => fn update_user(id: UserId, patch: UserPatch) -> User as UserRequest::UpdateUser, Error = UserError);
client_method!(UserClient => fn delete_user(id: UserId) -> User as UserRequest::DeleteUser, Error = UserError);

#[cfg(test)]
client_method!(UserClient => fn get_user_count() -> usize as UserRequest::GetUserCount, Error = UserError);

#[cfg(test)]
mod tests {
    use super::*;

    /// The client only forwards; a hand-driven receiver stands in for the actor.
    #[tokio::test]
    async fn test_create_forwards_payload() {
        let (sender, mut receiver) = mpsc::channel(4);
        let client = UserClient::new(sender);

        let task = tokio::spawn(async move {
            client
                .create_user(UserCreate::new("Test", "test@example.com"))
                .await
        });

        match receiver.recv().await {
            Some(UserRequest::CreateUser { user, respond_to }) => {
                assert_eq!(user.name, "Test");
                respond_to
                    .send(Ok(User::new(7, user.name, user.email)))
                    .unwrap();
            }
            other => panic!("Expected CreateUser request, got {other:?}"),
        }

        let created = task.await.unwrap().unwrap();
        assert_eq!(created.id, 7);
    }

    #[tokio::test]
    async fn test_dropped_reply_is_communication_error() {
        let (sender, mut receiver) = mpsc::channel(4);
        let client = UserClient::new(sender);

        let task = tokio::spawn(async move { client.get_user(1).await });

        // Drop the reply channel without answering.
        drop(receiver.recv().await);

        let result = task.await.unwrap();
        assert_eq!(
            result,
            Err(UserError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }
}
