//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::user::User;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user; a duplicate email is `AuthError::EmailTaken`
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by email (exact match)
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &str) -> AuthResult<bool>;
}
