//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{GenerateTokenInput, GenerateTokenUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    CreateUserRequest, GenerateTokenRequest, GenerateTokenResponse, UserResponse,
};

/// Shared state for auth handlers
pub struct AuthAppState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<U>,
    pub config: Arc<AuthConfig>,
}

impl<U> Clone for AuthAppState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Create User
// ============================================================================

/// POST /users
pub async fn create_user<U>(
    State(state): State<AuthAppState<U>>,
    body: Bytes,
) -> AuthResult<(StatusCode, Json<UserResponse>)>
where
    U: UserRepository + Send + Sync + 'static,
{
    let req: CreateUserRequest = serde_json::from_slice(&body).map_err(AppError::from)?;

    let use_case = SignUpUseCase::new(state.repo.clone());

    let output = use_case
        .execute(SignUpInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&output.user))))
}

// ============================================================================
// Generate Token
// ============================================================================

/// POST /users/generate_token
pub async fn generate_token<U>(
    State(state): State<AuthAppState<U>>,
    body: Bytes,
) -> AuthResult<Json<GenerateTokenResponse>>
where
    U: UserRepository + Send + Sync + 'static,
{
    let req: GenerateTokenRequest = serde_json::from_slice(&body).map_err(AppError::from)?;

    let use_case = GenerateTokenUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(GenerateTokenInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(GenerateTokenResponse {
        access_token: output.token.access_token.into_string(),
    }))
}
