//! Access Token Value Object
//!
//! JWT (HS256) carrying `sub`, `iat` and `exp` claims.
//!
//! This module only signs and checks signatures. Expiry is a policy decision
//! made by the session gate against its own clock.

use std::fmt;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::signing_key::SigningKey;
use super::user_id::UserId;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Why a raw token was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenDecodeError {
    #[error("token is not a well-formed JWT")]
    Malformed,

    #[error("unsupported token algorithm")]
    UnsupportedAlgorithm,

    #[error("token signature mismatch")]
    BadSignature,
}

impl From<jsonwebtoken::errors::Error> for TokenDecodeError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::InvalidSignature => Self::BadSignature,
            JwtErrorKind::InvalidAlgorithm | JwtErrorKind::InvalidAlgorithmName => {
                Self::UnsupportedAlgorithm
            }
            _ => Self::Malformed,
        }
    }
}

/// Registered claims carried by every access token (NumericDate seconds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: UserId,
    pub iat: i64,
    pub exp: i64,
}

/// Signed, URL-safe token string
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn sign(claims: &TokenClaims, key: &SigningKey) -> jsonwebtoken::errors::Result<Self> {
        let token = encode(
            &Header::new(ALGORITHM),
            claims,
            &EncodingKey::from_secret(key.as_bytes()),
        )?;

        Ok(Self(token))
    }

    /// Check the algorithm and signature, then decode the claims
    ///
    /// `exp` must be present but is not compared against any clock here.
    pub fn verify(raw: &str, key: &SigningKey) -> Result<TokenClaims, TokenDecodeError> {
        let data = decode::<TokenClaims>(
            raw,
            &DecodingKey::from_secret(key.as_bytes()),
            &validation(),
        )?;

        Ok(data.claims)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

fn validation() -> Validation {
    let mut validation = Validation::new(ALGORITHM);
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["exp", "sub"]);
    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::decode_header;

    fn claims() -> TokenClaims {
        TokenClaims {
            sub: UserId::new(),
            iat: 1_700_000_000,
            exp: 1_700_000_300,
        }
    }

    fn encode_with(header: Header, body: &impl Serialize, key: &SigningKey) -> String {
        encode(&header, body, &EncodingKey::from_secret(key.as_bytes())).unwrap()
    }

    #[test]
    fn test_sign_then_verify() {
        let key = SigningKey::random();
        let claims = claims();

        let token = AccessToken::sign(&claims, &key).unwrap();
        assert_eq!(token.as_str().split('.').count(), 3);

        let decoded = AccessToken::verify(token.as_str(), &key).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_header_is_standard_hs256() {
        let token = AccessToken::sign(&claims(), &SigningKey::random()).unwrap();
        let header = decode_header(token.as_str()).unwrap();

        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.typ.as_deref(), Some("JWT"));
    }

    #[test]
    fn test_expired_claims_still_verify() {
        let key = SigningKey::random();
        let mut claims = claims();
        claims.exp = 1;

        let token = AccessToken::sign(&claims, &key).unwrap();
        assert_eq!(AccessToken::verify(token.as_str(), &key).unwrap().exp, 1);
    }

    #[test]
    fn test_wrong_key_is_bad_signature() {
        let token = AccessToken::sign(&claims(), &SigningKey::random()).unwrap();
        let err = AccessToken::verify(token.as_str(), &SigningKey::random()).unwrap_err();
        assert_eq!(err, TokenDecodeError::BadSignature);
    }

    #[test]
    fn test_tampered_claims_are_rejected() {
        let key = SigningKey::random();
        let genuine = AccessToken::sign(&claims(), &key).unwrap();

        let mut forged = claims();
        forged.exp = i64::MAX;
        let forged = AccessToken::sign(&forged, &key).unwrap();

        let genuine: Vec<&str> = genuine.as_str().split('.').collect();
        let forged: Vec<&str> = forged.as_str().split('.').collect();
        let spliced = format!("{}.{}.{}", genuine[0], forged[1], genuine[2]);

        assert_eq!(
            AccessToken::verify(&spliced, &key).unwrap_err(),
            TokenDecodeError::BadSignature
        );
    }

    #[test]
    fn test_malformed_tokens() {
        let key = SigningKey::random();
        for raw in ["", "abc", "a.b", "a.b.c.d", "a.b.!!!"] {
            assert_eq!(
                AccessToken::verify(raw, &key).unwrap_err(),
                TokenDecodeError::Malformed,
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_signed_garbage_payload_is_malformed() {
        let key = SigningKey::random();
        let body = serde_json::json!({ "sub": "not-a-uuid", "iat": 1, "exp": 2 });
        let raw = encode_with(Header::new(Algorithm::HS256), &body, &key);

        assert_eq!(
            AccessToken::verify(&raw, &key).unwrap_err(),
            TokenDecodeError::Malformed
        );
    }

    #[test]
    fn test_missing_exp_is_rejected() {
        let key = SigningKey::random();
        let body = serde_json::json!({ "sub": UserId::new(), "iat": 1 });
        let raw = encode_with(Header::new(Algorithm::HS256), &body, &key);

        assert!(AccessToken::verify(&raw, &key).is_err());
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let key = SigningKey::random();
        let raw = encode_with(Header::new(Algorithm::HS512), &claims(), &key);

        assert_eq!(
            AccessToken::verify(&raw, &key).unwrap_err(),
            TokenDecodeError::UnsupportedAlgorithm
        );
    }

    #[test]
    fn test_unsigned_token_rejected() {
        let key = SigningKey::random();
        let signed = AccessToken::sign(&claims(), &key).unwrap();
        let body = signed.as_str().split('.').nth(1).unwrap();
        // {"alg":"none","typ":"JWT"}
        let raw = format!("eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.{body}.");

        assert!(AccessToken::verify(&raw, &key).is_err());
    }
}
