//! API Application
//!
//! Assembles the users and products routers into one service.

pub mod config;

use std::sync::Arc;

use auth::{AuthConfig, SessionGate, users_router};
use auth::domain::UserRepository;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use catalog::domain::ProductRepository;
use catalog::products_router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Build the application router over the given stores
pub fn app<U, P>(users: U, products: P, auth_config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
{
    let gate = Arc::new(SessionGate::new(auth_config.clone()));

    Router::new()
        .merge(users_router(users, auth_config))
        .merge(products_router(products, gate))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy for the configured frontend origins
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
