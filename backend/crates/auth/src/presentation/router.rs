//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the users router for any repository implementation
pub fn users_router<U>(repo: U, config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/users", post(handlers::create_user::<U>))
        .route("/users/generate_token", post(handlers::generate_token::<U>))
        .with_state(state)
}
