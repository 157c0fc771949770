//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::service::ProductInput;
use crate::domain::entity::product::Product;
use crate::domain::value_object::list_query::ListQuery;

/// Create / update product request
///
/// Missing fields decode as empty / zero so the entity rules report them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
}

impl From<ProductRequest> for ProductInput {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price,
            created_at: product.created_at,
        }
    }
}

/// `GET /products` query string; kept raw so bad numbers fall back to 0
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
}

impl From<&ListParams> for ListQuery {
    fn from(params: &ListParams) -> Self {
        ListQuery::from_params(
            params.page.as_deref(),
            params.limit.as_deref(),
            params.sort.as_deref(),
        )
    }
}
