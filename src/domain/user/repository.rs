//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Store a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user, failing with `NotFound` if it is absent
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user, returning whether it existed
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError>;
}
