//! HTTP Handlers
//!
//! All routes sit behind the session gate middleware, which leaves the
//! verified `Session` in the request extensions.

use auth::Session;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use kernel::error::app_error::AppError;

use crate::application::service::{ProductInput, ProductService};
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::list_query::ListQuery;
use crate::error::CatalogResult;
use crate::presentation::dto::{ListParams, ProductRequest, ProductResponse};

fn decode_product(body: &[u8]) -> CatalogResult<ProductInput> {
    let req: ProductRequest = serde_json::from_slice(body).map_err(AppError::from)?;
    Ok(req.into())
}

/// POST /products
pub async fn create_product<R>(
    State(service): State<ProductService<R>>,
    Extension(session): Extension<Session>,
    body: Bytes,
) -> CatalogResult<(StatusCode, Json<ProductResponse>)>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let input = decode_product(&body)?;
    let product = service.create(&session, input).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(&product))))
}

/// GET /products
pub async fn list_products<R>(
    State(service): State<ProductService<R>>,
    Extension(session): Extension<Session>,
    Query(params): Query<ListParams>,
) -> CatalogResult<Json<Vec<ProductResponse>>>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let query = ListQuery::from(&params);
    let products = service.list(&session, &query).await?;

    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// GET /products/{id}
pub async fn get_product<R>(
    State(service): State<ProductService<R>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let product = service.get(&session, &id).await?;

    Ok(Json(ProductResponse::from(&product)))
}

/// PUT /products/{id}
pub async fn update_product<R>(
    State(service): State<ProductService<R>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    body: Bytes,
) -> CatalogResult<Json<ProductResponse>>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let product = service
        .update(&session, &id, || decode_product(&body))
        .await?;

    Ok(Json(ProductResponse::from(&product)))
}

/// DELETE /products/{id}
pub async fn delete_product<R>(
    State(service): State<ProductService<R>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> CatalogResult<StatusCode>
where
    R: ProductRepository + Send + Sync + 'static,
{
    service.delete(&session, &id).await?;

    Ok(StatusCode::OK)
}
