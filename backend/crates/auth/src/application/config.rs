//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared read-only behind an `Arc`.

use std::time::Duration;

use thiserror::Error;

use crate::domain::value_object::signing_key::{SigningKey, SigningKeyError};

/// Default token lifetime (5 minutes)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(300);

/// Longest accepted token lifetime (366 days)
///
/// Keeps `iat + ttl` a representable timestamp for any current clock.
pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(366 * 24 * 60 * 60);

/// Startup configuration error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    SigningKey(#[from] SigningKeyError),

    #[error("token TTL must be at least one second")]
    ZeroTokenTtl,

    #[error("token TTL of {0}s exceeds the maximum of {max}s", max = MAX_TOKEN_TTL.as_secs())]
    TokenTtlTooLong(u64),
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC key for signing and verifying access tokens
    pub signing_key: SigningKey,
    /// Lifetime of an issued access token
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(secret: impl Into<Vec<u8>>, token_ttl: Duration) -> Result<Self, ConfigError> {
        if token_ttl.as_secs() == 0 {
            return Err(ConfigError::ZeroTokenTtl);
        }
        if token_ttl > MAX_TOKEN_TTL {
            return Err(ConfigError::TokenTtlTooLong(token_ttl.as_secs()));
        }
        Ok(Self {
            signing_key: SigningKey::new(secret)?,
            token_ttl,
        })
    }

    /// Create config with a random signing key (for development)
    pub fn development() -> Self {
        Self {
            signing_key: SigningKey::random(),
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Get token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX)
    }
}
