//! Token Signing Key
//!
//! Symmetric HMAC key shared by the token issuer and the session gate.
//! Built once at startup; an empty key is a configuration error.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SigningKeyError {
    #[error("signing key must not be empty")]
    Empty,
}

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    pub fn new(material: impl Into<Vec<u8>>) -> Result<Self, SigningKeyError> {
        let material = material.into();
        if material.is_empty() {
            return Err(SigningKeyError::Empty);
        }
        Ok(Self(material))
    }

    /// 32 random bytes, for development and tests
    pub fn random() -> Self {
        Self(platform::crypto::random_bytes(32))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningKey").field(&"[REDACTED]").finish()
    }
}
