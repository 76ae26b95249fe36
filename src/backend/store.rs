//! In-memory user table for the development backend. Ids are assigned
//! sequentially from 1 and never reused.

use crate::features::users::{User, UserInput};
use std::collections::BTreeMap;
use std::fmt;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NameTaken(String),
    EmailTaken(String),
    NotFound(i64),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTaken(name) => write!(f, "A user with the name {name} already exists"),
            Self::EmailTaken(email) => {
                write!(f, "A user with the email {email} already exists")
            }
            Self::NotFound(id) => write!(f, "User not found with ID: {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, User>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub struct UserStore {
    table: RwLock<Table>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<User> {
        self.table.read().await.rows.values().cloned().collect()
    }

    pub async fn count(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn get(&self, id: i64) -> Option<User> {
        self.table.read().await.rows.get(&id).cloned()
    }

    /// Inserts a new user. Names and emails must be unique.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NameTaken` or `StoreError::EmailTaken` on conflicts.
    pub async fn insert(&self, input: UserInput) -> Result<User, StoreError> {
        let mut table = self.table.write().await;

        if table.rows.values().any(|user| user.name == input.name) {
            return Err(StoreError::NameTaken(input.name));
        }
        if table.rows.values().any(|user| user.email == input.email) {
            return Err(StoreError::EmailTaken(input.email));
        }

        table.last_id += 1;
        let id = table.last_id;
        let user = User {
            id: Some(id),
            name: input.name,
            email: input.email,
        };
        table.rows.insert(id, user.clone());

        Ok(user)
    }

    /// Replaces the user stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no such user exists.
    pub async fn update(&self, id: i64, input: UserInput) -> Result<User, StoreError> {
        let mut table = self.table.write().await;
        let user = table.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        user.name = input.name;
        user.email = input.email;

        Ok(user.clone())
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no such user exists.
    pub async fn remove(&self, id: i64) -> Result<(), StoreError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = UserStore::new();
        let ada = store
            .insert(UserInput::new("Ada", "ada@example.com"))
            .await
            .unwrap();
        let grace = store
            .insert(UserInput::new("Grace", "grace@example.com"))
            .await
            .unwrap();

        assert_eq!(ada.id, Some(1));
        assert_eq!(grace.id, Some(2));
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn insert_rejects_duplicates() {
        let store = UserStore::new();
        store
            .insert(UserInput::new("Ada", "ada@example.com"))
            .await
            .unwrap();

        assert_eq!(
            store
                .insert(UserInput::new("Ada", "other@example.com"))
                .await
                .unwrap_err(),
            StoreError::NameTaken("Ada".to_string())
        );
        assert_eq!(
            store
                .insert(UserInput::new("Other", "ada@example.com"))
                .await
                .unwrap_err(),
            StoreError::EmailTaken("ada@example.com".to_string())
        );
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_remove() {
        let store = UserStore::new();
        store
            .insert(UserInput::new("Ada", "ada@example.com"))
            .await
            .unwrap();
        store.remove(1).await.unwrap();
        assert_eq!(store.remove(1).await, Err(StoreError::NotFound(1)));

        let next = store
            .insert(UserInput::new("Ada", "ada@example.com"))
            .await
            .unwrap();
        assert_eq!(next.id, Some(2));
        assert!(store.get(1).await.is_none());
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let store = UserStore::new();
        store
            .insert(UserInput::new("Ada", "ada@example.com"))
            .await
            .unwrap();

        let updated = store
            .update(1, UserInput::new("Ada L.", "ada.l@example.com"))
            .await
            .unwrap();
        assert_eq!(updated.id, Some(1));
        assert_eq!(store.get(1).await, Some(updated));
        assert_eq!(
            store
                .update(9, UserInput::new("x", "x@example.com"))
                .await
                .unwrap_err()
                .to_string(),
            "User not found with ID: 9"
        );
    }
}
