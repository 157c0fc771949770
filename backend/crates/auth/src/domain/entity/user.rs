//! User Entity
//!
//! An identity that can exchange its credentials for an access token.
//! The password hash never leaves this entity except towards the store.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::value_object::{
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// First failing user rule, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("id is required")]
    IdRequired,
    #[error("invalid id")]
    InvalidId,
    #[error("name is required")]
    NameRequired,
    #[error("email is required")]
    EmailRequired,
    #[error("password is required")]
    PasswordRequired,
}

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    password: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user, hashing the password
    ///
    /// Every field is checked before the (slow) hash is computed; the clear
    /// text is zeroized when this returns.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<Self> {
        let id = UserId::new();
        let name = name.into();
        let email = email.into();
        let password = password.into();

        check_rules(&id, &name, &email, !password.is_empty())?;

        let raw = RawPassword::new(password).map_err(|_| UserValidationError::PasswordRequired)?;
        let password =
            UserPassword::from_raw(&raw).map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(Self {
            id,
            name,
            email,
            password,
            created_at: Utc::now(),
        })
    }

    /// Rebuild a user loaded from storage
    pub fn restore(
        id: UserId,
        name: String,
        email: String,
        password: UserPassword,
        created_at: DateTime<Utc>,
    ) -> Result<Self, UserValidationError> {
        let user = Self {
            id,
            name,
            email,
            password,
            created_at,
        };
        user.validate()?;
        Ok(user)
    }

    /// Report the first broken rule, if any
    pub fn validate(&self) -> Result<(), UserValidationError> {
        check_rules(
            &self.id,
            &self.name,
            &self.email,
            !self.password.as_phc_string().is_empty(),
        )
    }

    /// Compare a candidate against the stored hash
    pub fn verify_password(&self, candidate: &str) -> bool {
        match RawPassword::new(candidate.to_string()) {
            Ok(raw) => self.password.verify(&raw),
            Err(_) => false,
        }
    }

    pub fn password_hash(&self) -> &UserPassword {
        &self.password
    }
}

fn check_rules(
    id: &UserId,
    name: &str,
    email: &str,
    has_password: bool,
) -> Result<(), UserValidationError> {
    if id.is_nil() {
        return Err(UserValidationError::IdRequired);
    }
    if !id.is_well_formed() {
        return Err(UserValidationError::InvalidId);
    }
    if name.is_empty() {
        return Err(UserValidationError::NameRequired);
    }
    if email.is_empty() {
        return Err(UserValidationError::EmailRequired);
    }
    if !has_password {
        return Err(UserValidationError::PasswordRequired);
    }
    Ok(())
}
