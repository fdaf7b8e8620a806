//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::{IdGenerator, User, UserDraft, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::UserService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, draft: UserDraft) -> Result<User, DomainError>;
    async fn get(&self, id: &str) -> Result<User, DomainError>;
    async fn update(&self, id: &str, draft: UserDraft) -> Result<User, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R, G> UserServiceTrait for UserService<R, G>
where
    R: UserRepository + 'static,
    G: IdGenerator + 'static,
{
    async fn create(&self, draft: UserDraft) -> Result<User, DomainError> {
        UserService::create(self, draft).await
    }

    async fn get(&self, id: &str) -> Result<User, DomainError> {
        UserService::get(self, id).await
    }

    async fn update(&self, id: &str, draft: UserDraft) -> Result<User, DomainError> {
        UserService::update(self, id, draft).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        UserService::delete(self, id).await
    }
}
