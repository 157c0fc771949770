//! Product Service
//!
//! Product CRUD behind the session gate. Every operation takes a
//! `&Session`, which only the gate can produce, so no store call is
//! reachable for an unauthenticated caller.

use std::sync::Arc;

use auth::Session;
use kernel::error::app_error::AppError;

use crate::domain::entity::product::{Product, ProductValidationError};
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::{list_query::ListQuery, product_id::ProductId};
use crate::error::{CatalogError, CatalogResult};

/// Client-supplied product fields
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
}

/// Product service
pub struct ProductService<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> Clone for ProductService<R>
where
    R: ProductRepository,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, session: &Session, input: ProductInput) -> CatalogResult<Product> {
        let product = Product::new(input.name, input.price)?;

        self.repo.create(&product).await?;

        tracing::info!(
            product_id = %product.id,
            actor = %session.subject(),
            "Product created"
        );

        Ok(product)
    }

    /// List products; the store's result is returned as is
    pub async fn list(&self, _session: &Session, query: &ListQuery) -> CatalogResult<Vec<Product>> {
        self.repo.find_all(query).await
    }

    pub async fn get(&self, _session: &Session, raw_id: &str) -> CatalogResult<Product> {
        let id = parse_id(raw_id)?;
        self.find_existing(&id).await
    }

    /// Update a product
    ///
    /// The payload is only decoded once the target is known to exist, and
    /// the merged product is validated before the store is touched.
    pub async fn update<F>(
        &self,
        session: &Session,
        raw_id: &str,
        decode: F,
    ) -> CatalogResult<Product>
    where
        F: FnOnce() -> CatalogResult<ProductInput> + Send,
    {
        let id = parse_id(raw_id)?;
        let existing = self.find_existing(&id).await?;

        let input = decode()?;
        let product = existing.with_changes(input.name, input.price)?;

        self.repo.update(&product).await?;

        tracing::info!(
            product_id = %product.id,
            actor = %session.subject(),
            "Product updated"
        );

        Ok(product)
    }

    pub async fn delete(&self, session: &Session, raw_id: &str) -> CatalogResult<()> {
        let id = parse_id(raw_id)?;
        self.find_existing(&id).await?;

        self.repo.delete(&id).await?;

        tracing::info!(
            product_id = %id,
            actor = %session.subject(),
            "Product deleted"
        );

        Ok(())
    }

    async fn find_existing(&self, id: &ProductId) -> CatalogResult<Product> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound)
    }
}

fn parse_id(raw: &str) -> CatalogResult<ProductId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ProductValidationError::IdRequired.into());
    }
    Ok(ProductId::parse_str(raw).map_err(AppError::from)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryProductRepository;
    use auth::{AuthConfig, SessionGate};
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store double counting lookups and mutating calls
    #[derive(Default)]
    struct CountingRepository {
        inner: InMemoryProductRepository,
        finds: AtomicUsize,
        updates: AtomicUsize,
        deletes: AtomicUsize,
    }

    impl ProductRepository for CountingRepository {
        async fn create(&self, product: &Product) -> CatalogResult<()> {
            self.inner.create(product).await
        }

        async fn find_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
            self.finds.fetch_add(1, Ordering::SeqCst);
            self.inner.find_by_id(id).await
        }

        async fn find_all(&self, query: &ListQuery) -> CatalogResult<Vec<Product>> {
            self.inner.find_all(query).await
        }

        async fn update(&self, product: &Product) -> CatalogResult<()> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            self.inner.update(product).await
        }

        async fn delete(&self, id: &ProductId) -> CatalogResult<()> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            self.inner.delete(id).await
        }
    }

    /// Store double whose every call fails
    struct FailingRepository;

    impl ProductRepository for FailingRepository {
        async fn create(&self, _: &Product) -> CatalogResult<()> {
            Err(CatalogError::Store("unavailable".into()))
        }

        async fn find_by_id(&self, _: &ProductId) -> CatalogResult<Option<Product>> {
            Err(CatalogError::Store("unavailable".into()))
        }

        async fn find_all(&self, _: &ListQuery) -> CatalogResult<Vec<Product>> {
            Err(CatalogError::Store("unavailable".into()))
        }

        async fn update(&self, _: &Product) -> CatalogResult<()> {
            Err(CatalogError::Store("unavailable".into()))
        }

        async fn delete(&self, _: &ProductId) -> CatalogResult<()> {
            Err(CatalogError::Store("unavailable".into()))
        }
    }

    fn session() -> Session {
        let config = Arc::new(AuthConfig::development());
        let user = auth::domain::User::new("John Doe", "j@j.com", "123456").unwrap();
        let token = auth::application::TokenIssuer::new(config.clone())
            .issue_at(&user, Utc::now())
            .unwrap();
        SessionGate::new(config)
            .authenticate(Some(token.access_token.as_str()))
            .unwrap()
    }

    fn input(name: &str, price: f64) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_round_trip() {
        let session = session();
        let service = ProductService::new(Arc::new(InMemoryProductRepository::new()));

        let created = service.create(&session, input("Notebook", 1500.0)).await.unwrap();
        let id = created.id.to_string();

        let fetched = service.get(&session, &id).await.unwrap();
        assert_eq!(fetched, created);

        let updated = service
            .update(&session, &id, || Ok(input("Notebook Pro", 1800.0)))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let fetched = service.get(&session, &id).await.unwrap();
        assert_eq!(fetched.name, "Notebook Pro");
        assert_eq!(fetched.price, 1800.0);
    }

    #[tokio::test]
    async fn test_invalid_create_leaves_store_untouched() {
        let session = session();
        let repo = Arc::new(InMemoryProductRepository::new());
        let service = ProductService::new(repo.clone());

        let result = service.create(&session, input("Pen", 0.0)).await;

        assert!(matches!(
            result,
            Err(CatalogError::Validation(ProductValidationError::PriceRequired))
        ));
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_update_missing_product_skips_store_update() {
        let session = session();
        let repo = Arc::new(CountingRepository::default());
        let service = ProductService::new(repo.clone());
        let mut decoded = false;

        let result = service
            .update(&session, &ProductId::new().to_string(), || {
                decoded = true;
                Ok(input("Ghost", 1.0))
            })
            .await;

        assert!(matches!(result, Err(CatalogError::NotFound)));
        assert!(!decoded);
        assert_eq!(repo.updates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_update_skips_store_update() {
        let session = session();
        let repo = Arc::new(CountingRepository::default());
        let service = ProductService::new(repo.clone());
        let created = service.create(&session, input("Pen", 2.0)).await.unwrap();

        let result = service
            .update(&session, &created.id.to_string(), || Ok(input("", 2.0)))
            .await;

        assert!(matches!(
            result,
            Err(CatalogError::Validation(ProductValidationError::NameRequired))
        ));
        assert_eq!(repo.updates.load(Ordering::SeqCst), 0);
        assert_eq!(service.get(&session, &created.id.to_string()).await.unwrap().name, "Pen");
    }

    #[tokio::test]
    async fn test_delete_missing_product_skips_store_delete() {
        let session = session();
        let repo = Arc::new(CountingRepository::default());
        let service = ProductService::new(repo.clone());

        let result = service.delete(&session, &ProductId::new().to_string()).await;

        assert!(matches!(result, Err(CatalogError::NotFound)));
        assert_eq!(repo.deletes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_product() {
        let session = session();
        let repo = Arc::new(CountingRepository::default());
        let service = ProductService::new(repo.clone());
        let created = service.create(&session, input("Pen", 2.0)).await.unwrap();
        let id = created.id.to_string();

        service.delete(&session, &id).await.unwrap();

        assert_eq!(repo.deletes.load(Ordering::SeqCst), 1);
        assert!(matches!(
            service.get(&session, &id).await,
            Err(CatalogError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_id_errors() {
        let session = session();
        let repo = Arc::new(CountingRepository::default());
        let service = ProductService::new(repo.clone());

        let empty = service.get(&session, "").await.unwrap_err();
        assert_eq!(empty.to_app_error().message(), "id is required");

        let errors = [
            service.get(&session, "123").await.unwrap_err(),
            service
                .update(&session, "123", || Ok(input("Phone", 10.0)))
                .await
                .unwrap_err(),
            service.delete(&session, "123").await.unwrap_err(),
        ];
        for err in errors {
            assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
            assert_eq!(err.to_app_error().message(), "invalid id");
        }

        let empty_update = service
            .update(&session, "", || Ok(input("Phone", 10.0)))
            .await
            .unwrap_err();
        assert_eq!(empty_update.to_app_error().message(), "id is required");
        let empty_delete = service.delete(&session, "").await.unwrap_err();
        assert_eq!(empty_delete.to_app_error().message(), "id is required");

        assert_eq!(repo.finds.load(Ordering::SeqCst), 0);
        assert_eq!(repo.updates.load(Ordering::SeqCst), 0);
        assert_eq!(repo.deletes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_store_failure_is_not_not_found() {
        let session = session();
        let service = ProductService::new(Arc::new(FailingRepository));

        let get = service.get(&session, &ProductId::new().to_string()).await;
        assert!(matches!(get, Err(CatalogError::Store(_))));

        let list = service.list(&session, &ListQuery::default()).await;
        assert!(matches!(list, Err(CatalogError::Store(_))));
    }
}
