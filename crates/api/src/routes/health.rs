//! Health check endpoint.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::ServiceHealth;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub services: BTreeMap<&'static str, ServiceHealth>,
}

/// GET /health: 200 when every service is serving, 503 otherwise.
pub async fn check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let snapshot = state.health.snapshot();
    let ready = snapshot.iter().all(|(_, health)| health.is_ready());

    let response = HealthResponse {
        status: if ready { "ok" } else { "degraded" },
        services: snapshot
            .into_iter()
            .map(|(service, health)| (service.slug(), health))
            .collect(),
    };

    let code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(response))
}
