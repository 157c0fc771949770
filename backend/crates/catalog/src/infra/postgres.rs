//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::{list_query::ListQuery, product_id::ProductId};
use crate::error::{CatalogError, CatalogResult};

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for PgProductRepository {
    async fn create(&self, product: &Product) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                id,
                name,
                price,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.name)
        .bind(product.price)
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                id,
                name,
                price,
                created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_product()).transpose()
    }

    async fn find_all(&self, query: &ListQuery) -> CatalogResult<Vec<Product>> {
        // Direction comes from a closed enum, never from user text
        let order = query.sort.as_sql();

        let rows = match query.window() {
            Some((offset, limit)) => {
                let sql = format!(
                    "SELECT id, name, price, created_at FROM products \
                     ORDER BY created_at {order}, id {order} LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, ProductRow>(&sql)
                    .bind(i64::try_from(limit).unwrap_or(i64::MAX))
                    .bind(i64::try_from(offset).unwrap_or(i64::MAX))
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT id, name, price, created_at FROM products \
                     ORDER BY created_at {order}, id {order}"
                );
                sqlx::query_as::<_, ProductRow>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.into_iter().map(ProductRow::into_product).collect()
    }

    async fn update(&self, product: &Product) -> CatalogResult<()> {
        let result = sqlx::query("UPDATE products SET name = $2, price = $3 WHERE id = $1")
            .bind(product.id.as_uuid())
            .bind(&product.name)
            .bind(product.price)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> CatalogResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    price: f64,
    created_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> CatalogResult<Product> {
        Product::restore(
            ProductId::from_uuid(self.id),
            self.name,
            self.price,
            self.created_at,
        )
        .map_err(|e| CatalogError::Store(format!("Stored product is invalid: {e}")))
    }
}
