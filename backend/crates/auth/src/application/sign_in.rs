//! Generate Token Use Case
//!
//! Exchanges an email and password for an access token.

use std::sync::{Arc, OnceLock};

use crate::application::config::AuthConfig;
use crate::application::issue_token::{IssuedToken, TokenIssuer};
use crate::domain::entity::user::UserValidationError;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Credential exchange input
pub struct GenerateTokenInput {
    pub email: String,
    pub password: String,
}

/// Credential exchange output
pub struct GenerateTokenOutput {
    pub token: IssuedToken,
}

/// Generate token use case
pub struct GenerateTokenUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    issuer: TokenIssuer,
}

impl<U> GenerateTokenUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            issuer: TokenIssuer::new(config),
        }
    }

    pub async fn execute(&self, input: GenerateTokenInput) -> AuthResult<GenerateTokenOutput> {
        if input.email.is_empty() {
            return Err(UserValidationError::EmailRequired.into());
        }
        if input.password.is_empty() {
            return Err(UserValidationError::PasswordRequired.into());
        }

        let user = self.user_repo.find_by_email(&input.email).await?;

        // Both branches run one Argon2 verification
        let password = input.password;
        let (user, password_valid) = tokio::task::spawn_blocking(move || {
            let valid = match &user {
                Some(user) => user.verify_password(&password),
                None => verify_against_dummy(&password),
            };
            (user, valid)
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {e}")))?;

        let Some(user) = user else {
            tracing::warn!("Token requested for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !password_valid {
            tracing::warn!(user_id = %user.id, "Password mismatch on token request");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issuer.issue(&user)?;

        tracing::info!(user_id = %user.id, expires_at = token.expires_at, "Access token issued");

        Ok(GenerateTokenOutput { token })
    }
}

/// Hash checked when the email matches no user; hashed once, on first use
fn dummy_password() -> Option<&'static UserPassword> {
    static DUMMY: OnceLock<Option<UserPassword>> = OnceLock::new();
    DUMMY
        .get_or_init(|| {
            RawPassword::new("unknown-account-placeholder".to_string())
                .ok()
                .and_then(|raw| UserPassword::from_raw(&raw).ok())
        })
        .as_ref()
}

/// Spend the same Argon2 work as a real check; never succeeds
fn verify_against_dummy(candidate: &str) -> bool {
    if let (Some(hash), Ok(raw)) = (dummy_password(), RawPassword::new(candidate.to_string())) {
        let _ = hash.verify(&raw);
    }
    false
}
