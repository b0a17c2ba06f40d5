//! User Service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// User service orchestrating repository operations.
///
/// Normalizes the repository's `Ok(None)` absence signal into
/// `UserError::NotFound` so every handler fails the same way for a
/// missing record.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user
    #[instrument(skip(self, input))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        self.repository.insert(input).await
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Delete a user, returning its pre-deletion state
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .delete_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Apply a partial update, returning the post-update state
    ///
    /// A missing record fails with NotFound, consistent with get/delete.
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> UserResult<User> {
        self.repository
            .update_by_id(id, input)
            .await?
            .ok_or(UserError::NotFound(id))
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use serde_json::json;

    fn create_input() -> CreateUser {
        serde_json::from_value(json!({
            "firstName": "menna",
            "lastName": "hamdy",
            "age": 3,
            "job": "developer"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_user_returns_stored_record() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|input| Ok(User::new(input)));

        let service = UserService::new(repo);
        let user = service.create_user(create_input()).await.unwrap();

        assert_eq!(user.full_name, "menna hamdy");
        assert_eq!(user.age, Some(3));
    }

    #[tokio::test]
    async fn test_get_user_maps_absence_to_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserService::new(repo);
        let err = service.get_user(Uuid::now_v7()).await.unwrap_err();

        assert!(matches!(err, UserError::NotFound(_)));
        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    async fn test_get_user_returns_record() {
        let user = User::new(create_input());
        let expected = user.clone();
        let uid = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .withf(move |id| *id == uid)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(repo);
        let found = service.get_user(expected.id).await.unwrap();

        assert_eq!(found, expected);
    }

    #[tokio::test]
    async fn test_delete_user_returns_prior_state() {
        let user = User::new(create_input());
        let expected = user.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_delete_by_id()
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(repo);
        let deleted = service.delete_user(expected.id).await.unwrap();

        assert_eq!(deleted, expected);
    }

    #[tokio::test]
    async fn test_delete_user_maps_absence_to_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete_by_id().returning(|_| Ok(None));

        let service = UserService::new(repo);
        let err = service.delete_user(Uuid::now_v7()).await.unwrap_err();

        assert!(matches!(err, UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_user_maps_absence_to_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_by_id().returning(|_, _| Ok(None));

        let service = UserService::new(repo);
        let err = service
            .update_user(Uuid::now_v7(), UpdateUser::default())
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_user_returns_post_update_state() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_by_id().returning(|_, update| {
            let mut user = User::new(serde_json::from_value(json!({
                "firstName": "ahmed",
                "lastName": "ibrahim",
                "age": 25
            }))
            .unwrap());
            user.apply_update(update);
            Ok(Some(user))
        });

        let service = UserService::new(repo);
        let update: UpdateUser = serde_json::from_value(json!({ "age": 26 })).unwrap();
        let updated = service.update_user(Uuid::now_v7(), update).await.unwrap();

        assert_eq!(updated.age, Some(26));
        assert_eq!(updated.full_name, "ahmed ibrahim");
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_database_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .returning(|| Err(UserError::Database("connection reset".to_string())));

        let service = UserService::new(repo);
        let err = service.list_users().await.unwrap_err();

        assert!(matches!(err, UserError::Database(_)));
    }
}
