//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::entity::user::UserValidationError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// User input broke an entity rule
    #[error(transparent)]
    Validation(#[from] UserValidationError),

    /// Request could not be decoded
    #[error(transparent)]
    Request(#[from] AppError),

    /// Another user already owns this email
    #[error("Email already registered")]
    EmailTaken,

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No access token was presented
    #[error("authentication required")]
    Unauthenticated,

    /// Token is malformed or its signature does not verify
    #[error("invalid token")]
    InvalidToken,

    /// Token signature is fine but its expiry has passed
    #[error("token expired")]
    TokenExpired,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Store failure not tied to a specific driver
    #[error("Store error: {0}")]
    Store(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Request(e) => e.kind(),
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::Unauthenticated
            | AuthError::InvalidToken
            | AuthError::TokenExpired => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Store(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Whether the caller should be challenged for a bearer token
    pub fn is_session_failure(&self) -> bool {
        matches!(
            self,
            AuthError::Unauthenticated | AuthError::InvalidToken | AuthError::TokenExpired
        )
    }

    /// Convert to AppError
    ///
    /// Store and internal details stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Request(e) => AppError::new(e.kind(), e.message().to_string()),
            AuthError::Database(_) | AuthError::Store(_) | AuthError::Internal(_) => {
                AppError::internal("internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Store(msg) => {
                tracing::error!(message = %msg, "Auth store error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid credential exchange attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected access token with bad signature or format");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let challenge = self.is_session_failure();
        let mut response = self.to_app_error().into_response();
        if challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
