use async_trait::async_trait;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User};

/// Repository trait for User persistence
///
/// Defines the data access interface for users. Absence of a record is a
/// valid outcome (`Ok(None)`), distinct from a store failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, deriving the entity from the DTO
    async fn insert(&self, input: CreateUser) -> UserResult<User>;

    /// All stored users, in storage order (no sort applied)
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Look up a user by id
    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Delete a user by id, returning its pre-deletion state
    async fn delete_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Apply a partial update, returning the post-update state
    async fn update_by_id(&self, id: Uuid, update: UpdateUser) -> UserResult<Option<User>>;
}
