//! Product service trait and in-memory implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::{
    HealthState, MaintenanceError, Page, PageRequest, ServiceName, Status, failed_precondition,
    paginate, unavailable,
};

use super::{GET_PRODUCT_SUBJECT, Product, ProductErrorReason, ProductFailureCode, seed};
use crate::ProductId;
use crate::telemetry;

/// Operations of the product service.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Returns a product that is in stock.
    ///
    /// Checks run in order: maintenance, existence, stock.
    async fn get_product(&self, product_id: &str) -> Result<Product, Status>;

    /// Returns one page of the products in `category`, or of all products
    /// when `category` is empty. The total counts the filtered set.
    async fn list_products(
        &self,
        category: &str,
        page: PageRequest,
    ) -> Result<Page<Product>, Status>;

    /// Returns the requested products that exist, in request order.
    ///
    /// Unknown identifiers are dropped without error.
    async fn get_products_by_ids(&self, product_ids: &[String]) -> Result<Vec<Product>, Status>;
}

/// Product service over a catalogue that is read-only after construction.
#[derive(Debug, Clone)]
pub struct InMemoryProductService {
    products: Arc<BTreeMap<ProductId, Product>>,
    health: HealthState,
}

impl InMemoryProductService {
    /// Creates a service owning `products`.
    pub fn new(products: impl IntoIterator<Item = Product>, health: HealthState) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();
        Self {
            products: Arc::new(products),
            health,
        }
    }

    /// Creates a service holding the seed catalogue.
    pub fn seeded(health: HealthState) -> Self {
        Self::new(seed::products(Utc::now()), health)
    }

    /// Returns the health cell this service reads on every lookup.
    pub fn health(&self) -> &HealthState {
        &self.health
    }

    fn lookup(&self, product_id: &str) -> Result<Product, Status> {
        if !self.health.get().accepts_requests() {
            return Err(unavailable(
                &MaintenanceError {
                    service: ServiceName::Products.label(),
                },
                &ProductErrorReason::Maintenance,
            ));
        }

        let Some(product) = self.products.get(product_id) else {
            return Err(failed_precondition(
                &ProductFailureCode::ProductNotFound,
                GET_PRODUCT_SUBJECT,
                format!("Product not found: {product_id}"),
            ));
        };

        if !product.in_stock() {
            return Err(failed_precondition(
                &ProductFailureCode::ProductOutOfStock,
                GET_PRODUCT_SUBJECT,
                format!("Product is out of stock: {product_id}"),
            ));
        }

        Ok(product.clone())
    }
}

#[async_trait]
impl ProductService for InMemoryProductService {
    #[tracing::instrument(skip(self))]
    async fn get_product(&self, product_id: &str) -> Result<Product, Status> {
        let result = self.lookup(product_id);
        if let Err(status) = &result {
            tracing::debug!(%status, "GetProduct rejected");
        }
        telemetry::record(ServiceName::Products, "GetProduct", &result);
        result
    }

    #[tracing::instrument(skip(self))]
    async fn list_products(
        &self,
        category: &str,
        page: PageRequest,
    ) -> Result<Page<Product>, Status> {
        let candidates: Vec<Product> = self
            .products
            .values()
            .filter(|product| category.is_empty() || product.category == category)
            .cloned()
            .collect();

        let result = Ok(paginate(&candidates, page));
        telemetry::record(ServiceName::Products, "ListProducts", &result);
        result
    }

    #[tracing::instrument(skip(self), fields(requested = product_ids.len()))]
    async fn get_products_by_ids(&self, product_ids: &[String]) -> Result<Vec<Product>, Status> {
        let found: Vec<Product> = product_ids
            .iter()
            .filter_map(|id| self.products.get(id.as_str()).cloned())
            .collect();

        tracing::debug!(found = found.len(), "bulk lookup finished");
        let result = Ok(found);
        telemetry::record(ServiceName::Products, "GetProductsByIDs", &result);
        result
    }
}
