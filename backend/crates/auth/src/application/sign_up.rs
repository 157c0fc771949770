//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user: User,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let SignUpInput {
            name,
            email,
            password,
        } = input;

        // Validate and hash off the async workers
        let user = tokio::task::spawn_blocking(move || User::new(name, email, password))
            .await
            .map_err(|e| AuthError::Internal(format!("Password hashing task failed: {e}")))??;

        if self.user_repo.exists_by_email(&user.email).await? {
            return Err(AuthError::EmailTaken);
        }

        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.id, "User signed up");

        Ok(SignUpOutput { user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::UserValidationError;
    use crate::infra::memory::InMemoryUserRepository;

    fn input(name: &str, email: &str, password: &str) -> SignUpInput {
        SignUpInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_persists_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = SignUpUseCase::new(repo.clone());

        let output = use_case
            .execute(input("John Doe", "j@j.com", "123456"))
            .await
            .unwrap();

        let stored = repo.find_by_email("j@j.com").await.unwrap().unwrap();
        assert_eq!(stored.id, output.user.id);
        assert!(stored.verify_password("123456"));
    }

    #[tokio::test]
    async fn test_sign_up_rejects_duplicate_email() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = SignUpUseCase::new(repo.clone());

        use_case
            .execute(input("John Doe", "j@j.com", "123456"))
            .await
            .unwrap();
        let result = use_case.execute(input("Jane Doe", "j@j.com", "654321")).await;

        assert!(matches!(result, Err(AuthError::EmailTaken)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_sign_up_validation_leaves_store_untouched() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = SignUpUseCase::new(repo.clone());

        let result = use_case.execute(input("John Doe", "", "123456")).await;

        assert!(matches!(
            result,
            Err(AuthError::Validation(UserValidationError::EmailRequired))
        ));
        assert_eq!(repo.len().await, 0);
    }
}
