use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use super::store::UserStore;
use crate::clients::UserClient;
use crate::domain::{User, UserCreate, UserId, UserPatch};
use crate::error::UserError;
use crate::messages::{ServiceResponse, UserRequest};

/// Actor that owns the [`UserStore`]. Every read and write goes through its
/// mailbox, so mutations are applied one at a time.
pub struct UserService {
    receiver: mpsc::Receiver<UserRequest>,
    store: UserStore,
}

impl UserService {
    pub fn new(buffer_size: usize, store: UserStore) -> (Self, UserClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, store };
        let client = UserClient::new(sender);
        (service, client)
    }

    #[instrument(name = "user_service", skip(self))]
    pub async fn run(mut self) {
        info!(user_count = self.store.len(), "UserService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                UserRequest::ListUsers { respond_to } => {
                    self.handle_list_users(respond_to);
                }
                UserRequest::GetUser { id, respond_to } => {
                    self.handle_get_user(id, respond_to);
                }
                UserRequest::CreateUser { user, respond_to } => {
                    self.handle_create_user(user, respond_to);
                }
                UserRequest::UpdateUser {
                    id,
                    patch,
                    respond_to,
                } => {
                    self.handle_update_user(id, patch, respond_to);
                }
                UserRequest::DeleteUser { id, respond_to } => {
                    self.handle_delete_user(id, respond_to);
                }
                UserRequest::Shutdown => {
                    info!("UserService shutting down");
                    break;
                }
                #[cfg(test)]
                UserRequest::GetUserCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!("UserService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_users(&self, respond_to: ServiceResponse<Vec<User>, UserError>) {
        debug!("Processing list_users request");

        let users = self.store.list().to_vec();
        debug!(user_count = users.len(), "Listed users");

        let _ = respond_to.send(Ok(users));
    }

    #[instrument(fields(user_id = %id), skip(self, respond_to))]
    fn handle_get_user(&self, id: UserId, respond_to: ServiceResponse<Option<User>, UserError>) {
        debug!("Processing get_user request");

        let user = self.store.find_by_id(id).cloned();

        match &user {
            Some(user) => debug!(user_name = %user.name, "User found"),
            None => debug!("User not found"),
        }

        let _ = respond_to.send(Ok(user));
    }

    #[instrument(fields(user_name = %user.name, user_email = %user.email), skip(self, user, respond_to))]
    fn handle_create_user(&mut self, user: UserCreate, respond_to: ServiceResponse<User, UserError>) {
        debug!("Processing create_user request");

        let created = self.store.create(user);
        info!(user_id = created.id, "User created successfully");

        let _ = respond_to.send(Ok(created));
    }

    #[instrument(fields(user_id = %id), skip(self, patch, respond_to))]
    fn handle_update_user(
        &mut self,
        id: UserId,
        patch: UserPatch,
        respond_to: ServiceResponse<User, UserError>,
    ) {
        debug!("Processing update_user request");

        let result = match self.store.update(id, patch) {
            Some(user) => {
                info!(user_name = %user.name, "User updated successfully");
                Ok(user)
            }
            None => {
                debug!("User not found for update");
                Err(UserError::NotFound(id))
            }
        };

        let _ = respond_to.send(result);
    }

    #[instrument(fields(user_id = %id), skip(self, respond_to))]
    fn handle_delete_user(&mut self, id: UserId, respond_to: ServiceResponse<User, UserError>) {
        debug!("Processing delete_user request");

        let result = match self.store.delete(id) {
            Some(user) => {
                info!(remaining = self.store.len(), "User deleted successfully");
                Ok(user)
            }
            None => {
                debug!("User not found for delete");
                Err(UserError::NotFound(id))
            }
        };

        let _ = respond_to.send(result);
    }
}
