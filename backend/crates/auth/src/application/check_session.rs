//! Session Gate
//!
//! Verifies access tokens in front of protected operations.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::value_object::access_token::AccessToken;
use crate::error::{AuthError, AuthResult};

/// Session gate
#[derive(Debug, Clone)]
pub struct SessionGate {
    config: Arc<AuthConfig>,
}

impl SessionGate {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Authenticate a raw bearer token against the current time
    pub fn authenticate(&self, raw_token: Option<&str>) -> AuthResult<Session> {
        self.authenticate_at(raw_token, Utc::now())
    }

    /// Authenticate a raw bearer token as of `now`
    ///
    /// Checks run in order: presence, signature and format, expiry.
    pub fn authenticate_at(
        &self,
        raw_token: Option<&str>,
        now: DateTime<Utc>,
    ) -> AuthResult<Session> {
        let raw_token = match raw_token.map(str::trim) {
            Some(token) if !token.is_empty() => token,
            _ => return Err(AuthError::Unauthenticated),
        };

        let claims = AccessToken::verify(raw_token, &self.config.signing_key).map_err(|e| {
            tracing::debug!(reason = %e, "Access token rejected");
            AuthError::InvalidToken
        })?;

        if claims.sub.is_nil() {
            return Err(AuthError::InvalidToken);
        }

        if now.timestamp() >= claims.exp {
            return Err(AuthError::TokenExpired);
        }

        let issued_at = DateTime::from_timestamp(claims.iat, 0).ok_or(AuthError::InvalidToken)?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(AuthError::InvalidToken)?;

        Ok(Session::new(claims.sub, issued_at, expires_at))
    }
}
