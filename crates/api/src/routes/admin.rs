//! Runtime control of service health.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use common::{ServiceHealth, ServiceName};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SetHealthRequest {
    pub state: ServiceHealth,
}

#[derive(Serialize)]
pub struct SetHealthResponse {
    pub service: ServiceName,
    pub previous: ServiceHealth,
    pub state: ServiceHealth,
}

/// PUT /admin/services/{service}/health: replace a service's health.
#[tracing::instrument(skip(state, body))]
pub async fn set_health(
    State(state): State<Arc<AppState>>,
    Path(service): Path<String>,
    body: Result<Json<SetHealthRequest>, JsonRejection>,
) -> Result<Json<SetHealthResponse>, ApiError> {
    let service: ServiceName = service.parse()?;
    let Json(req) = body?;

    let previous = state.health.get(service).set(req.state);
    tracing::info!(%service, %previous, state = %req.state, "service health changed");

    Ok(Json(SetHealthResponse {
        service,
        previous,
        state: req.state,
    }))
}
