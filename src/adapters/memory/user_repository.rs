//! In-memory UserRepository, for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Email};
use crate::domain::user::{User, UserId, UserRecord};
use crate::ports::UserRepository;

/// Stores users as their primitive records, the same shape a real store
/// would hold, so every read goes back through full reconstruction.
#[derive(Default)]
pub struct InMemoryUserRepository {
    records: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        let records = self.records.read().await;
        match records.get(id.value()) {
            Some(record) => User::from_persistence(record.clone()),
            None => Err(DomainError::user_not_found(id)),
        }
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let records = self.records.read().await;
        records
            .values()
            .find(|record| record.email == email.value())
            .cloned()
            .map(User::from_persistence)
            .transpose()
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let record = user.to_primitives();
        self.records.write().await.insert(record.id.clone(), record);
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        match records.remove(id.value()) {
            Some(_) => Ok(()),
            None => Err(DomainError::user_not_found(id)),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let records = self.records.read().await;
        records
            .values()
            .cloned()
            .map(User::from_persistence)
            .collect()
    }
}
