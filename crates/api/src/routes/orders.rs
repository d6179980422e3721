//! Order lookup, per-user listing and creation endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use common::PageRequest;
use domain::{Order, OrderItem};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::{AppState, client_config};

// -- Request types --

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

// -- Response types --

#[derive(Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    pub total: usize,
}

// -- Handlers --

/// GET /orders/{id}: GetOrder.
#[tracing::instrument(skip(state, headers))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let orders = state.clients.order_client(&client_config(&headers))?;
    Ok(Json(orders.get_order(&id).await?))
}

/// GET /users/{id}/orders?limit=&offset=: ListOrdersByUser.
#[tracing::instrument(skip(state, headers, query))]
pub async fn list_by_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<OrderListResponse>, ApiError> {
    let Query(page) = query?;
    let orders = state.clients.order_client(&client_config(&headers))?;
    let page = orders.list_orders_by_user(&user_id, page).await?;

    Ok(Json(OrderListResponse {
        orders: page.items,
        total: page.total,
    }))
}

/// POST /orders: CreateOrder.
#[tracing::instrument(skip(state, headers, body))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(req) = body?;
    let orders = state.clients.order_client(&client_config(&headers))?;
    let order = orders.create_order(&req.user_id, req.items).await?;

    Ok((StatusCode::CREATED, Json(order)))
}
