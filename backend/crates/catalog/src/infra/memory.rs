//! In-Memory Repository Implementation

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::list_query::{ListQuery, SortOrder};
use crate::domain::value_object::product_id::ProductId;
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> CatalogResult<()> {
        let mut products = self.products.write().await;
        if products.contains_key(&product.id) {
            return Err(CatalogError::Store(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        products.insert(product.id, product.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
        Ok(self.products.read().await.get(id).cloned())
    }

    async fn find_all(&self, query: &ListQuery) -> CatalogResult<Vec<Product>> {
        let mut products: Vec<Product> = self.products.read().await.values().cloned().collect();

        // Tie-break on id so equal timestamps still list in a stable order
        products.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });
        if query.sort == SortOrder::Desc {
            products.reverse();
        }

        Ok(match query.window() {
            Some((offset, limit)) => products
                .into_iter()
                .skip(usize::try_from(offset).unwrap_or(usize::MAX))
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .collect(),
            None => products,
        })
    }

    async fn update(&self, product: &Product) -> CatalogResult<()> {
        match self.products.write().await.get_mut(&product.id) {
            Some(stored) => {
                stored.name = product.name.clone();
                stored.price = product.price;
                Ok(())
            }
            None => Err(CatalogError::NotFound),
        }
    }

    async fn delete(&self, id: &ProductId) -> CatalogResult<()> {
        match self.products.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(CatalogError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    async fn seeded(count: i64) -> InMemoryProductRepository {
        let repo = InMemoryProductRepository::new();
        let base = Utc::now();
        for i in 0..count {
            let product = Product::restore(
                ProductId::new(),
                format!("Product {i}"),
                (i + 1) as f64,
                base + Duration::seconds(i),
            )
            .unwrap();
            repo.create(&product).await.unwrap();
        }
        repo
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_find_all_orders_by_creation() {
        let repo = seeded(3).await;

        let asc = repo.find_all(&ListQuery::default()).await.unwrap();
        assert_eq!(names(&asc), ["Product 0", "Product 1", "Product 2"]);

        let desc = repo
            .find_all(&ListQuery::from_params(None, None, Some("desc")))
            .await
            .unwrap();
        assert_eq!(names(&desc), ["Product 2", "Product 1", "Product 0"]);
    }

    #[tokio::test]
    async fn test_find_all_pages() {
        let repo = seeded(25).await;

        let page = repo
            .find_all(&ListQuery::from_params(Some("3"), Some("10"), None))
            .await
            .unwrap();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].name, "Product 20");

        let beyond = repo
            .find_all(&ListQuery::from_params(Some("9"), Some("10"), None))
            .await
            .unwrap();
        assert!(beyond.is_empty());

        let everything = repo
            .find_all(&ListQuery::from_params(Some("x"), Some("10"), None))
            .await
            .unwrap();
        assert_eq!(everything.len(), 25);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = seeded(1).await;
        let mut product = repo.find_all(&ListQuery::default()).await.unwrap().remove(0);

        product.name = "Renamed".to_string();
        repo.update(&product).await.unwrap();
        assert_eq!(
            repo.find_by_id(&product.id).await.unwrap().unwrap().name,
            "Renamed"
        );

        repo.delete(&product.id).await.unwrap();
        assert!(repo.find_by_id(&product.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(&product.id).await,
            Err(CatalogError::NotFound)
        ));
    }
}
