//! User service: create, read, update and delete over a user repository

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{
    validate_user_draft, IdGenerator, User, UserDraft, UserId, UserRepository,
};
use crate::domain::DomainError;

const USER_NOT_FOUND: &str = "User not found";

/// User service
#[derive(Debug)]
pub struct UserService<R: UserRepository, G: IdGenerator> {
    repository: Arc<R>,
    id_generator: Arc<G>,
}

impl<R: UserRepository, G: IdGenerator> UserService<R, G> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, id_generator: Arc<G>) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    /// Create a user with a freshly minted id
    pub async fn create(&self, draft: UserDraft) -> Result<User, DomainError> {
        let fields = validate_user_draft(draft)?;

        let user = User::new(self.id_generator.generate(), fields.name, fields.email);
        let user = self.repository.create(user).await?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            let total = self.count().await?;
            debug!(user_id = %user.id(), total = total, "Created user");
        }
        Ok(user)
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<User, DomainError> {
        self.repository
            .get(&UserId::new(id))
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
    }

    /// Replace a user's name and email.
    ///
    /// The body is validated before the id is looked up, so an invalid body
    /// on an unknown id reports the validation error.
    pub async fn update(&self, id: &str, draft: UserDraft) -> Result<User, DomainError> {
        let fields = validate_user_draft(draft)?;

        debug!(user_id = %id, "Updating user");

        self.repository
            .update(User::new(UserId::new(id), fields.name, fields.email))
            .await
    }

    /// Delete a user
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        if !self.repository.delete(&UserId::new(id)).await? {
            return Err(DomainError::not_found(USER_NOT_FOUND));
        }

        if tracing::enabled!(tracing::Level::DEBUG) {
            let total = self.count().await?;
            debug!(user_id = %id, total = total, "Deleted user");
        }
        Ok(())
    }

    /// Count stored users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{MockIdGenerator, MockUserRepository};
    use crate::infrastructure::user::id_generator::{SequentialIdGenerator, UuidIdGenerator};
    use crate::infrastructure::user::repository::InMemoryUserRepository;
    use std::collections::HashSet;

    fn create_service() -> UserService<InMemoryUserRepository, UuidIdGenerator> {
        UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(UuidIdGenerator::new()),
        )
    }

    fn validation_error() -> DomainError {
        DomainError::validation("name and email are required")
    }

    fn not_found_error() -> DomainError {
        DomainError::not_found("User not found")
    }

    #[tokio::test]
    async fn test_create_user() {
        let service = create_service();

        let user = service
            .create(UserDraft::new("Ann", "a@x.com"))
            .await
            .unwrap();

        assert!(!user.id().as_str().is_empty());
        assert_eq!(user.name(), "Ann");
        assert_eq!(user.email(), "a@x.com");
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_keeps_non_string_values() {
        let service = create_service();

        let user = service.create(UserDraft::new(5, true)).await.unwrap();

        assert_eq!(user.name(), &serde_json::json!(5));
        assert_eq!(user.email(), &serde_json::json!(true));
        assert_eq!(service.get(user.id().as_str()).await.unwrap(), user);
    }

    #[tokio::test]
    async fn test_create_mints_unique_ids() {
        let service = create_service();
        let mut ids = HashSet::new();

        for i in 0..50 {
            let user = service
                .create(UserDraft::new(format!("user{}", i), "u@x.com"))
                .await
                .unwrap();
            assert!(ids.insert(user.id().clone()));
        }

        assert_eq!(service.count().await.unwrap(), 50);
    }

    #[tokio::test]
    async fn test_create_invalid() {
        let service = create_service();

        assert_eq!(
            service.create(UserDraft::default()).await,
            Err(validation_error())
        );
        assert_eq!(
            service.create(UserDraft::new("", "a@x.com")).await,
            Err(validation_error())
        );
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_uses_generated_id() {
        let mut generator = MockIdGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|| UserId::new("fixed-id"));

        let service = UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(generator),
        );

        let user = service
            .create(UserDraft::new("Ann", "a@x.com"))
            .await
            .unwrap();
        assert_eq!(user.id().as_str(), "fixed-id");
    }

    #[tokio::test]
    async fn test_create_invalid_does_not_mint_id() {
        let mut generator = MockIdGenerator::new();
        generator.expect_generate().never();

        let service = UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(generator),
        );

        assert!(service.create(UserDraft::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_get_user() {
        let service = create_service();
        let created = service
            .create(UserDraft::new("Ann", "a@x.com"))
            .await
            .unwrap();

        let fetched = service.get(created.id().as_str()).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_unknown_user() {
        let service = create_service();

        assert_eq!(service.get("nope").await, Err(not_found_error()));
    }

    #[tokio::test]
    async fn test_update_user() {
        let service = create_service();
        let created = service
            .create(UserDraft::new("Ann", "a@x.com"))
            .await
            .unwrap();
        let id = created.id().as_str();

        let updated = service
            .update(id, UserDraft::new("Ann2", "a2@x.com"))
            .await
            .unwrap();
        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name(), "Ann2");
        assert_eq!(updated.email(), "a2@x.com");

        let fetched = service.get(id).await.unwrap();
        assert_eq!(fetched, updated);
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_user() {
        let service = create_service();

        let result = service.update("nope", UserDraft::new("Ann", "a@x.com")).await;
        assert_eq!(result, Err(not_found_error()));
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let service = create_service();
        let created = service
            .create(UserDraft::new("Ann", "a@x.com"))
            .await
            .unwrap();

        let invalid = UserDraft::new("", "x");

        assert_eq!(
            service.update("nope", invalid.clone()).await,
            Err(validation_error())
        );
        assert_eq!(
            service.update(created.id().as_str(), invalid).await,
            Err(validation_error())
        );

        let unchanged = service.get(created.id().as_str()).await.unwrap();
        assert_eq!(unchanged, created);
    }

    #[tokio::test]
    async fn test_invalid_update_never_reaches_repository() {
        let repository = Arc::new(MockUserRepository::new());
        let service = UserService::new(
            repository.clone(),
            Arc::new(SequentialIdGenerator::new("t")),
        );

        let result = service.update("t-1", UserDraft::default()).await;

        assert_eq!(result, Err(validation_error()));
        assert!(repository.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_user() {
        let service = create_service();
        let created = service
            .create(UserDraft::new("Ann", "a@x.com"))
            .await
            .unwrap();
        let id = created.id().as_str();

        service.delete(id).await.unwrap();

        assert_eq!(service.get(id).await, Err(not_found_error()));
        assert_eq!(service.delete(id).await, Err(not_found_error()));
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_only_removes_target() {
        let service = UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(SequentialIdGenerator::new("u")),
        );

        service.create(UserDraft::new("Ann", "a@x.com")).await.unwrap();
        service.create(UserDraft::new("Bob", "b@x.com")).await.unwrap();

        service.delete("u-1").await.unwrap();

        assert_eq!(service.get("u-2").await.unwrap().name(), "Bob");
        assert_eq!(service.count().await.unwrap(), 1);
    }
}
