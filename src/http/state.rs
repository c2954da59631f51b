//! State shared across all HTTP handlers.

use std::time::Instant;

use crate::clients::UserClient;

#[derive(Clone)]
pub struct AppState {
    /// Handle to the store actor.
    pub users: UserClient,
    started_at: Instant,
}

impl AppState {
    pub fn new(users: UserClient) -> Self {
        Self {
            users,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was created.
    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
