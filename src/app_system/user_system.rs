use tracing::{error, info, instrument};

use crate::clients::UserClient;
use crate::domain::User;
use crate::error::UserError;
use crate::user_actor::{IdPolicy, UserService, UserStore};

const MAILBOX_SIZE: usize = 100;

/// Owns the running store actor and hands out clients to it.
///
/// Each `UserSystem` has its own store, so tests can run side by side
/// without sharing state.
pub struct UserSystem {
    pub user_client: UserClient,
    handle: tokio::task::JoinHandle<()>,
}

impl UserSystem {
    /// Starts a store actor seeded with the two fixed records.
    #[instrument(name = "user_system")]
    pub fn new(policy: IdPolicy) -> Self {
        Self::with_store(UserStore::new(User::seed(), policy))
    }

    pub fn with_store(store: UserStore) -> Self {
        let (user_service, user_client) = UserService::new(MAILBOX_SIZE, store);
        let handle = tokio::spawn(user_service.run());

        info!("User system started");

        Self {
            user_client,
            handle,
        }
    }

    /// Stops the store actor and waits for it to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), UserError> {
        info!("Shutting down user system");

        if let Err(e) = self.user_client.shutdown().await {
            error!(error = %e, "Store actor already gone");
        }

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Store actor task failed");
            return Err(UserError::ActorCommunicationError(e.to_string()));
        }

        info!("User system shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_system_starts_seeded_and_shuts_down() {
        let system = UserSystem::new(IdPolicy::StoreLength);

        let users = system.user_client.list_users().await.unwrap();
        assert_eq!(users, User::seed());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_systems_are_isolated() {
        let first = UserSystem::new(IdPolicy::StoreLength);
        let second = UserSystem::new(IdPolicy::StoreLength);

        first.user_client.delete_user(1).await.unwrap();

        assert_eq!(first.user_client.list_users().await.unwrap().len(), 1);
        assert_eq!(second.user_client.list_users().await.unwrap().len(), 2);
    }
}
