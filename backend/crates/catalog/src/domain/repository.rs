//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::product::Product;
use crate::domain::value_object::{list_query::ListQuery, product_id::ProductId};
use crate::error::CatalogResult;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    async fn create(&self, product: &Product) -> CatalogResult<()>;

    async fn find_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>>;

    /// Products ordered by `created_at`, windowed by the query's page and limit
    async fn find_all(&self, query: &ListQuery) -> CatalogResult<Vec<Product>>;

    /// Replace name and price of an existing product
    async fn update(&self, product: &Product) -> CatalogResult<()>;

    async fn delete(&self, id: &ProductId) -> CatalogResult<()>;
}
