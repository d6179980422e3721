//! Product lookup, listing and bulk lookup endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use common::PageRequest;
use domain::Product;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::{AppState, client_config};

/// Query of `GET /products`. Missing fields take their zero value.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub limit: i32,
    #[serde(default)]
    pub offset: i32,
}

#[derive(Deserialize)]
pub struct BatchGetRequest {
    pub product_ids: Vec<String>,
}

#[derive(Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct BatchGetResponse {
    pub products: Vec<Product>,
}

/// GET /products/{id}: GetProduct.
#[tracing::instrument(skip(state, headers))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let products = state.clients.product_client(&client_config(&headers))?;
    Ok(Json(products.get_product(&id).await?))
}

/// GET /products?category=&limit=&offset=: ListProducts.
#[tracing::instrument(skip(state, headers, query))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let Query(query) = query?;
    let products = state.clients.product_client(&client_config(&headers))?;
    let page = products
        .list_products(&query.category, PageRequest::new(query.limit, query.offset))
        .await?;

    Ok(Json(ProductListResponse {
        products: page.items,
        total: page.total,
    }))
}

/// POST /products/batch-get: GetProductsByIDs.
#[tracing::instrument(skip(state, headers, body))]
pub async fn batch_get(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<BatchGetRequest>, JsonRejection>,
) -> Result<Json<BatchGetResponse>, ApiError> {
    let Json(req) = body?;
    let products = state.clients.product_client(&client_config(&headers))?;

    Ok(Json(BatchGetResponse {
        products: products.get_products_by_ids(&req.product_ids).await?,
    }))
}
