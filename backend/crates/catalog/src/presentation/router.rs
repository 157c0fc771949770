//! Catalog Router

use auth::{SessionGate, require_auth_session};
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use crate::application::service::ProductService;
use crate::domain::repository::ProductRepository;
use crate::presentation::handlers;

/// Create the products router; every route requires a valid access token
pub fn products_router<R>(repo: R, gate: Arc<SessionGate>) -> Router
where
    R: ProductRepository + Send + Sync + 'static,
{
    let service = ProductService::new(Arc::new(repo));

    Router::new()
        .route(
            "/products",
            get(handlers::list_products::<R>).post(handlers::create_product::<R>),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product::<R>)
                .put(handlers::update_product::<R>)
                .delete(handlers::delete_product::<R>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_auth_session))
        .with_state(service)
}
