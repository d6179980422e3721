//! User lookup and listing endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use common::PageRequest;
use domain::User;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::{AppState, client_config};

#[derive(Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: usize,
}

/// GET /users/{id}: GetUser.
#[tracing::instrument(skip(state, headers))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let users = state.clients.user_client(&client_config(&headers))?;
    Ok(Json(users.get_user(&id).await?))
}

/// GET /users?limit=&offset=: ListUsers.
#[tracing::instrument(skip(state, headers, query))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<UserListResponse>, ApiError> {
    let Query(page) = query?;
    let users = state.clients.user_client(&client_config(&headers))?;
    let page = users.list_users(page).await?;

    Ok(Json(UserListResponse {
        users: page.items,
        total: page.total,
    }))
}
