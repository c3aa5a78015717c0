//! UserRepository port for user persistence operations

use async_trait::async_trait;

use crate::domain::{
    foundation::{DomainError, Email},
    user::{User, UserId},
};

/// Repository for managing user aggregates.
///
/// `find_by_id` treats an unknown id as a `USER_NOT_FOUND` error rather
/// than an `Option`: every caller of a lookup-by-id needs the user, and
/// threading the miss as an error keeps the handlers flat.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id, failing when no such user exists
    async fn find_by_id(&self, id: &UserId) -> Result<User, DomainError>;

    /// Find a user by normalized email address
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;

    /// Insert or replace a user
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Delete a user completely
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;

    /// Load every stored user
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;
}
