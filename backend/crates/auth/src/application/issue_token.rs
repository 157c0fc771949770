//! Token Issuer
//!
//! Mints signed access tokens bound to a user.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::value_object::access_token::{AccessToken, TokenClaims};
use crate::error::{AuthError, AuthResult};

/// Issued token with its expiry
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: AccessToken,
    pub expires_at: i64,
}

#[derive(Debug, Clone)]
pub struct TokenIssuer {
    config: Arc<AuthConfig>,
}

impl TokenIssuer {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn issue(&self, user: &User) -> AuthResult<IssuedToken> {
        self.issue_at(user, Utc::now())
    }

    /// Issue a token as of `now`
    pub fn issue_at(&self, user: &User, now: DateTime<Utc>) -> AuthResult<IssuedToken> {
        let iat = now.timestamp();
        let claims = TokenClaims {
            sub: user.id,
            iat,
            exp: iat.saturating_add(self.config.token_ttl_secs()),
        };

        let access_token = AccessToken::sign(&claims, &self.config.signing_key)
            .map_err(|e| AuthError::Internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken {
            access_token,
            expires_at: claims.exp,
        })
    }
}
