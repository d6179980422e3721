//! Client factory capability and its static implementation.

use std::sync::Arc;

use common::ServiceName;
use domain::{OrderService, ProductService, UserService};

use crate::config::ClientConfig;
use crate::error::{GatewayError, Result};

/// Supplies domain service clients to the aggregation layer.
///
/// Implementations must return the same underlying handle for a service on
/// every call; they must not open a connection per call.
pub trait ClientFactory: Send + Sync {
    fn user_client(&self, config: &ClientConfig) -> Result<Arc<dyn UserService>>;

    fn product_client(&self, config: &ClientConfig) -> Result<Arc<dyn ProductService>>;

    fn order_client(&self, config: &ClientConfig) -> Result<Arc<dyn OrderService>>;
}

/// Factory over handles established once at startup.
#[derive(Clone, Default)]
pub struct StaticClientFactory {
    users: Option<Arc<dyn UserService>>,
    products: Option<Arc<dyn ProductService>>,
    orders: Option<Arc<dyn OrderService>>,
}

impl StaticClientFactory {
    /// Creates a factory serving all three services.
    pub fn new(
        users: Arc<dyn UserService>,
        products: Arc<dyn ProductService>,
        orders: Arc<dyn OrderService>,
    ) -> Self {
        Self {
            users: Some(users),
            products: Some(products),
            orders: Some(orders),
        }
    }

    pub fn with_users(mut self, users: Arc<dyn UserService>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn with_products(mut self, products: Arc<dyn ProductService>) -> Self {
        self.products = Some(products);
        self
    }

    pub fn with_orders(mut self, orders: Arc<dyn OrderService>) -> Self {
        self.orders = Some(orders);
        self
    }

    /// Returns the services this factory can provision.
    pub fn configured(&self) -> Vec<ServiceName> {
        let mut names = Vec::with_capacity(3);
        if self.users.is_some() {
            names.push(ServiceName::Users);
        }
        if self.products.is_some() {
            names.push(ServiceName::Products);
        }
        if self.orders.is_some() {
            names.push(ServiceName::Orders);
        }
        names
    }
}

impl std::fmt::Debug for StaticClientFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticClientFactory")
            .field("configured", &self.configured())
            .finish()
    }
}

fn provision<T: ?Sized>(
    slot: &Option<Arc<T>>,
    service: ServiceName,
    config: &ClientConfig,
) -> Result<Arc<T>> {
    tracing::trace!(%service, request_id = ?config.request_id, "provisioning client");
    slot.clone().ok_or(GatewayError::NotConfigured(service))
}

impl ClientFactory for StaticClientFactory {
    fn user_client(&self, config: &ClientConfig) -> Result<Arc<dyn UserService>> {
        provision(&self.users, ServiceName::Users, config)
    }

    fn product_client(&self, config: &ClientConfig) -> Result<Arc<dyn ProductService>> {
        provision(&self.products, ServiceName::Products, config)
    }

    fn order_client(&self, config: &ClientConfig) -> Result<Arc<dyn OrderService>> {
        provision(&self.orders, ServiceName::Orders, config)
    }
}
