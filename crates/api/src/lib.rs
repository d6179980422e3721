//! HTTP/JSON surface for the user, product and order services.
//!
//! Every RPC is exposed as one route; handlers resolve service clients
//! through the gateway's [`gateway::ClientFactory`] and map structured
//! errors to HTTP statuses. Health control, structured logging (tracing)
//! and Prometheus metrics come along.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use common::ServiceName;
use domain::{InMemoryOrderService, InMemoryProductService, InMemoryUserService};
use gateway::StaticClientFactory;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use state::{AppState, ServiceHealthStates};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/users", get(routes::users::list))
        .route("/users/{id}", get(routes::users::get))
        .route("/users/{id}/orders", get(routes::orders::list_by_user))
        .route("/products", get(routes::products::list))
        .route("/products/batch-get", post(routes::products::batch_get))
        .route("/products/{id}", get(routes::products::get))
        .route("/orders", post(routes::orders::create))
        .route("/orders/{id}", get(routes::orders::get))
        .route(
            "/admin/services/{service}/health",
            put(routes::admin::set_health),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state: the three seeded services behind
/// a static client factory, with health taken from `config`.
pub fn create_default_state(config: &Config) -> Arc<AppState> {
    let health = ServiceHealthStates::from_config(config);

    let users = InMemoryUserService::seeded(health.get(ServiceName::Users).clone());
    let products = InMemoryProductService::seeded(health.get(ServiceName::Products).clone());
    let orders = InMemoryOrderService::seeded(health.get(ServiceName::Orders).clone());

    let clients = StaticClientFactory::new(Arc::new(users), Arc::new(products), Arc::new(orders));
    tracing::debug!(?clients, "client factory ready");

    Arc::new(AppState::new(Arc::new(clients), health))
}
