//! GetUser - Query handler for looking up a single user.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::user::{User, UserId};
use crate::ports::UserRepository;

/// Query for a user by id.
#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub user_id: UserId,
}

/// Handler for user lookups.
pub struct GetUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetUserQuery) -> Result<User, DomainError> {
        self.repository.find_by_id(&query.user_id).await
    }
}
