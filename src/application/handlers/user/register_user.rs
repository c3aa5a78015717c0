//! RegisterUser - Command handler for registering new user accounts.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::user::{NewUser, User, UserId};
use crate::ports::UserRepository;

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub input: NewUser,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub user_id: UserId,
}

/// Handler for registering users.
pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<RegisterUserResult, DomainError> {
        // 1. Assign an identifier when the caller did not supply one
        let mut input = cmd.input;
        if input.id.trim().is_empty() {
            input.id = UserId::generate().to_primitives();
        }

        // 2. Validate the raw input into an aggregate
        let user = User::create(input, Timestamp::now())?;

        // 3. Reject duplicate email addresses
        if self.repository.find_by_email(user.email()).await?.is_some() {
            return Err(DomainError::new(
                ErrorCode::DuplicateEmail,
                format!("A user with email {} already exists", user.email()),
            ));
        }

        // 4. Persist
        self.repository.save(&user).await?;

        info!(user_id = %user.id(), role = %user.role(), "user registered");

        Ok(RegisterUserResult {
            user_id: user.id().clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::foundation::AddressRecord;
    use crate::domain::user::Status;

    fn test_input() -> NewUser {
        NewUser {
            id: "user-1".to_string(),
            email: "Some@Email.com".to_string(),
            name: "John Doe".to_string(),
            password: "dummy_hashed_password".to_string(),
            role: "client".to_string(),
            status: None,
            phone: Some("1161619090".to_string()),
            address: Some(AddressRecord::new("someStreet", "1111", "Some City")),
            loyalty_points: None,
        }
    }

    #[tokio::test]
    async fn registers_a_valid_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handler = RegisterUserHandler::new(repo.clone());

        let result = handler
            .handle(RegisterUserCommand {
                input: test_input(),
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(&result.user_id).await.unwrap();
        assert_eq!(stored.status(), Status::Active);
        // Email was normalized before storage.
        assert_eq!(stored.email().value(), "some@email.com");
    }

    #[tokio::test]
    async fn generates_an_id_when_none_is_supplied() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handler = RegisterUserHandler::new(repo.clone());

        let mut input = test_input();
        input.id = String::new();

        let result = handler
            .handle(RegisterUserCommand { input })
            .await
            .unwrap();

        assert!(!result.user_id.value().is_empty());
        assert!(repo.find_by_id(&result.user_id).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_invalid_input() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handler = RegisterUserHandler::new(repo);

        let mut input = test_input();
        input.password = "short".to_string();

        let err = handler
            .handle(RegisterUserCommand { input })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPassword);
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handler = RegisterUserHandler::new(repo);

        handler
            .handle(RegisterUserCommand {
                input: test_input(),
            })
            .await
            .unwrap();

        let mut input = test_input();
        input.id = "user-2".to_string();
        // Email uniqueness is checked on the normalized value.
        input.email = "SOME@EMAIL.COM".to_string();

        let err = handler
            .handle(RegisterUserCommand { input })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateEmail);
    }
}
