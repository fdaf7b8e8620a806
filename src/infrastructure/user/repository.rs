//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id.as_str()).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let id = user.id().as_str().to_string();

        if users.contains_key(&id) {
            return Err(DomainError::validation(format!(
                "User with ID '{}' already exists",
                id
            )));
        }

        users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        match users.get_mut(user.id().as_str()) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(DomainError::not_found("User not found")),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(id.as_str()).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: &str, name: &str) -> User {
        User::new(UserId::new(id), name, format!("{}@example.com", name))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "ann");

        repo.create(user.clone()).await.unwrap();

        let retrieved = repo.get(user.id()).await.unwrap();
        assert_eq!(retrieved, Some(user));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = InMemoryUserRepository::new();

        let retrieved = repo.get(&UserId::new("missing")).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id() {
        let repo = InMemoryUserRepository::new();

        repo.create(create_test_user("user-1", "ann")).await.unwrap();
        let result = repo.create(create_test_user("user-1", "bob")).await;

        assert!(result.is_err());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "ann");
        repo.create(user.clone()).await.unwrap();

        let updated = User::new(user.id().clone(), "Ann2", "a2@x.com");
        repo.update(updated.clone()).await.unwrap();

        let retrieved = repo.get(&UserId::new("user-1")).await.unwrap().unwrap();
        assert_eq!(retrieved, updated);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryUserRepository::new();

        let result = repo.update(create_test_user("user-1", "ann")).await;
        assert_eq!(result, Err(DomainError::not_found("User not found")));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        repo.create(create_test_user("user-1", "ann")).await.unwrap();
        repo.create(create_test_user("user-2", "bob")).await.unwrap();

        assert!(repo.delete(&UserId::new("user-1")).await.unwrap());
        assert!(!repo.delete(&UserId::new("user-1")).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(repo.get(&UserId::new("user-2")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryUserRepository::new();
        let handle = repo.clone();

        repo.create(create_test_user("user-1", "ann")).await.unwrap();

        assert_eq!(handle.count().await.unwrap(), 1);
    }
}
