use serde::{Deserialize, Serialize};

/// Identifier of a user record within the store.
pub type UserId = u64;

/// Represents a registered user in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// Payload for updating an existing user. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// The records every fresh store starts with.
    pub fn seed() -> Vec<User> {
        vec![
            User::new(1, "Alice", "alice@example.com"),
            User::new(2, "Bob", "bob@example.com"),
        ]
    }

    /// Overwrites only the fields present in `patch`.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_name_only_keeps_email() {
        let mut user = User::new(1, "Alice", "alice@example.com");
        user.apply(UserPatch {
            name: Some("Alicia".to_string()),
            email: None,
        });
        assert_eq!(user.name, "Alicia");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut user = User::new(2, "Bob", "bob@example.com");
        user.apply(UserPatch::default());
        assert_eq!(user, User::new(2, "Bob", "bob@example.com"));
    }

    #[test]
    fn test_seed_ids_are_one_and_two() {
        let ids: Vec<UserId> = User::seed().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
