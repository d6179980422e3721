//! Shared application state.

use std::sync::Arc;

use common::{HealthState, ServiceHealth, ServiceName};
use gateway::{ClientConfig, ClientFactory};

use crate::config::Config;

/// Health cells of the three services, shared with the services themselves.
#[derive(Debug, Clone, Default)]
pub struct ServiceHealthStates {
    users: HealthState,
    products: HealthState,
    orders: HealthState,
}

impl ServiceHealthStates {
    /// Creates cells holding the configured initial health.
    pub fn from_config(config: &Config) -> Self {
        Self {
            users: HealthState::new(config.initial_health(ServiceName::Users)),
            products: HealthState::new(config.initial_health(ServiceName::Products)),
            orders: HealthState::new(config.initial_health(ServiceName::Orders)),
        }
    }

    pub fn get(&self, service: ServiceName) -> &HealthState {
        match service {
            ServiceName::Users => &self.users,
            ServiceName::Products => &self.products,
            ServiceName::Orders => &self.orders,
        }
    }

    /// Returns the current health of every service.
    pub fn snapshot(&self) -> Vec<(ServiceName, ServiceHealth)> {
        ServiceName::ALL
            .into_iter()
            .map(|service| (service, self.get(service).get()))
            .collect()
    }
}

/// Shared application state accessible from all handlers.
///
/// Handlers reach the domain services only through `clients`.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn ClientFactory>,
    pub health: ServiceHealthStates,
}

impl AppState {
    pub fn new(clients: Arc<dyn ClientFactory>, health: ServiceHealthStates) -> Self {
        Self { clients, health }
    }
}

/// Builds the per-call client configuration from request headers.
pub fn client_config(headers: &axum::http::HeaderMap) -> ClientConfig {
    match headers
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
    {
        Some(request_id) => ClientConfig::new().with_request_id(request_id),
        None => ClientConfig::new(),
    }
}
