//! Catalog Backend Module
//!
//! Products and their token-gated CRUD surface.
//!
//! - `domain/` - Product entity, ids, list queries, repository trait
//! - `application/` - Product service (requires an auth `Session`)
//! - `infra/` - In-memory and PostgreSQL repositories
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::service::ProductService;
pub use error::{CatalogError, CatalogResult};
pub use infra::{memory::InMemoryProductRepository, postgres::PgProductRepository};
pub use presentation::router::products_router;
