//! In-memory record store owned by the user actor.

use std::fmt;

use crate::domain::{User, UserCreate, UserId, UserPatch};

/// How the store picks the id of a newly created user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// `id = store length + 1`. Ids can repeat once a record has been deleted.
    #[default]
    StoreLength,
    /// A counter that only moves forward, starting after the highest seeded id.
    Monotonic,
}

impl IdPolicy {
    /// Parses the `USER_ID_POLICY` value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "length" | "store_length" => Some(Self::StoreLength),
            "monotonic" => Some(Self::Monotonic),
            _ => None,
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::StoreLength => write!(f, "length"),
            IdPolicy::Monotonic => write!(f, "monotonic"),
        }
    }
}

/// Ordered sequence of users. Lookups are linear scans; order is insertion order.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
    policy: IdPolicy,
    next_id: UserId,
}

impl UserStore {
    pub fn new(seed: Vec<User>, policy: IdPolicy) -> Self {
        let next_id = seed.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            users: seed,
            policy,
            next_id,
        }
    }

    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn find_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn index_by_id(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }

    /// Appends a new user and returns it.
    pub fn create(&mut self, payload: UserCreate) -> User {
        let id = self.assign_id();
        let user = User {
            id,
            name: payload.name,
            email: payload.email,
        };
        self.users.push(user.clone());
        user
    }

    /// Overwrites the supplied fields of the first user matching `id`.
    pub fn update(&mut self, id: UserId, patch: UserPatch) -> Option<User> {
        let index = self.index_by_id(id)?;
        let user = self.users.get_mut(index)?;
        user.apply(patch);
        Some(user.clone())
    }

    /// Removes the first user matching `id`, shifting later records down.
    pub fn delete(&mut self, id: UserId) -> Option<User> {
        let index = self.index_by_id(id)?;
        Some(self.users.remove(index))
    }

    fn assign_id(&mut self) -> UserId {
        match self.policy {
            IdPolicy::StoreLength => self.users.len() as UserId + 1,
            IdPolicy::Monotonic => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        }
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new(User::seed(), IdPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(store: &mut UserStore, name: &str, email: &str) -> User {
        store.create(UserCreate::new(name, email))
    }

    #[test]
    fn test_seeded_store_lists_in_insertion_order() {
        let store = UserStore::default();
        let names: Vec<&str> = store.list().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_create_assigns_length_plus_one() {
        let mut store = UserStore::default();
        let user = create(&mut store, "X", "x@y.com");
        assert_eq!(user.id, 3);
        assert_eq!(store.len(), 3);
        assert_eq!(store.find_by_id(3), Some(&user));
    }

    #[test]
    fn test_length_policy_reuses_id_after_delete() {
        let mut store = UserStore::default();
        let first = create(&mut store, "X", "x@y.com");
        store.delete(1);
        let second = create(&mut store, "Y", "y@z.com");

        assert_eq!(first.id, 3);
        assert_eq!(second.id, 3);
        // The lookup returns the earlier record of the colliding pair.
        assert_eq!(store.find_by_id(3).map(|u| u.name.as_str()), Some("X"));
    }

    #[test]
    fn test_monotonic_policy_never_reuses_ids() {
        let mut store = UserStore::new(User::seed(), IdPolicy::Monotonic);
        create(&mut store, "X", "x@y.com");
        store.delete(1);
        let user = create(&mut store, "Y", "y@z.com");
        assert_eq!(user.id, 4);
    }

    #[test]
    fn test_update_overwrites_only_supplied_fields() {
        let mut store = UserStore::default();
        let updated = store
            .update(
                2,
                UserPatch {
                    name: None,
                    email: Some("robert@example.com".to_string()),
                },
            )
            .unwrap();
        assert_eq!(updated, User::new(2, "Bob", "robert@example.com"));
        assert_eq!(store.find_by_id(2), Some(&updated));
    }

    #[test]
    fn test_update_missing_returns_none() {
        let mut store = UserStore::default();
        assert_eq!(store.update(99, UserPatch::default()), None);
    }

    #[test]
    fn test_delete_removes_exactly_one_and_keeps_order() {
        let mut store = UserStore::default();
        create(&mut store, "Carol", "carol@example.com");

        let removed = store.delete(2).unwrap();
        assert_eq!(removed.name, "Bob");
        let ids: Vec<UserId> = store.list().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.index_by_id(3), Some(1));
        assert_eq!(store.delete(2), None);
    }

    #[test]
    fn test_id_policy_parse() {
        assert_eq!(IdPolicy::parse("monotonic"), Some(IdPolicy::Monotonic));
        assert_eq!(IdPolicy::parse(" Length "), Some(IdPolicy::StoreLength));
        assert_eq!(IdPolicy::parse("random"), None);
    }
}
