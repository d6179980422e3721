//! Order service trait and in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::{
    HealthState, MaintenanceError, Page, PageRequest, ServiceName, Status, failed_precondition,
    unavailable,
};
use tokio::sync::RwLock;

use super::{
    GET_ORDER_SUBJECT, Order, OrderErrorReason, OrderFailureCode, OrderItem, OrderStore, seed,
};
use crate::UserId;
use crate::telemetry;

/// Operations of the order service.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Returns a viewable order.
    ///
    /// Checks run in order: maintenance, existence, cancellation, items.
    async fn get_order(&self, order_id: &str) -> Result<Order, Status>;

    /// Returns one page of a user's orders in creation order.
    async fn list_orders_by_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Page<Order>, Status>;

    /// Places a pending order whose total is computed from `items`.
    ///
    /// Product identifiers and quantities are stored as given.
    async fn create_order(&self, user_id: &str, items: Vec<OrderItem>) -> Result<Order, Status>;
}

/// Order service over an [`OrderStore`] behind a single lock.
#[derive(Debug, Clone)]
pub struct InMemoryOrderService {
    store: Arc<RwLock<OrderStore>>,
    health: HealthState,
}

impl InMemoryOrderService {
    /// Creates a service owning `store`.
    pub fn new(store: OrderStore, health: HealthState) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            health,
        }
    }

    /// Creates a service holding the seed orders.
    pub fn seeded(health: HealthState) -> Self {
        let store = OrderStore::with_orders(seed::orders(Utc::now()), seed::NEXT_SEQUENCE);
        Self::new(store, health)
    }

    /// Returns the health cell this service reads on every lookup.
    pub fn health(&self) -> &HealthState {
        &self.health
    }

    /// Returns true if both store indexes agree.
    pub async fn is_consistent(&self) -> bool {
        self.store.read().await.is_consistent()
    }

    async fn lookup(&self, order_id: &str) -> Result<Order, Status> {
        if !self.health.get().accepts_requests() {
            return Err(unavailable(
                &MaintenanceError {
                    service: ServiceName::Orders.label(),
                },
                &OrderErrorReason::Maintenance,
            ));
        }

        let store = self.store.read().await;
        let Some(order) = store.get(order_id) else {
            return Err(failed_precondition(
                &OrderFailureCode::OrderNotFound,
                GET_ORDER_SUBJECT,
                format!("Order not found: {order_id}"),
            ));
        };

        if order.is_cancelled() {
            return Err(failed_precondition(
                &OrderFailureCode::OrderCancelled,
                GET_ORDER_SUBJECT,
                "This order is cancelled and cannot be viewed.",
            ));
        }

        if !order.has_items() {
            return Err(failed_precondition(
                &OrderFailureCode::OrderNoItems,
                GET_ORDER_SUBJECT,
                "This order has no items.",
            ));
        }

        Ok(order.clone())
    }
}

#[async_trait]
impl OrderService for InMemoryOrderService {
    #[tracing::instrument(skip(self))]
    async fn get_order(&self, order_id: &str) -> Result<Order, Status> {
        let result = self.lookup(order_id).await;
        if let Err(status) = &result {
            tracing::debug!(%status, "GetOrder rejected");
        }
        telemetry::record(ServiceName::Orders, "GetOrder", &result);
        result
    }

    #[tracing::instrument(skip(self))]
    async fn list_orders_by_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Page<Order>, Status> {
        let result = Ok(self.store.read().await.list_by_user(user_id, page));
        telemetry::record(ServiceName::Orders, "ListOrdersByUser", &result);
        result
    }

    #[tracing::instrument(skip(self, items), fields(items = items.len()))]
    async fn create_order(&self, user_id: &str, items: Vec<OrderItem>) -> Result<Order, Status> {
        let (order, stored) = {
            let mut store = self.store.write().await;
            let order = store.create(UserId::new(user_id), items, Utc::now());
            (order, store.len())
        };

        tracing::info!(
            order_id = %order.id,
            total_amount = %order.total_amount,
            stored,
            "order created"
        );
        metrics::counter!("orders_created_total").increment(1);

        let result = Ok(order);
        telemetry::record(ServiceName::Orders, "CreateOrder", &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Money, OrderStatus};
    use common::{Code, ServiceHealth};

    fn service() -> InMemoryOrderService {
        InMemoryOrderService::seeded(HealthState::default())
    }

    #[tokio::test]
    async fn test_get_order() {
        let order = service().get_order("order-001").await.unwrap();
        assert_eq!(order.user_id.as_str(), "user-001");
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.items.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_order_is_not_found() {
        let status = service().get_order("order-404").await.unwrap_err();

        assert_eq!(status.code(), Code::FailedPrecondition);
        assert!(status.has_violation(&OrderFailureCode::OrderNotFound));
        assert_eq!(status.message(), "Order not found: order-404");
    }

    #[tokio::test]
    async fn test_cancelled_takes_precedence_over_no_items() {
        let status = service().get_order("order-999").await.unwrap_err();

        assert!(status.has_violation(&OrderFailureCode::OrderCancelled));
        assert_eq!(
            status.message(),
            "This order is cancelled and cannot be viewed."
        );
    }

    #[tokio::test]
    async fn test_empty_order_is_rejected() {
        let service = service();
        let created = service.create_order("user-002", vec![]).await.unwrap();

        let status = service.get_order(created.id.as_str()).await.unwrap_err();
        assert!(status.has_violation(&OrderFailureCode::OrderNoItems));
        assert_eq!(status.violation().unwrap().subject, GET_ORDER_SUBJECT);
    }

    #[tokio::test]
    async fn test_orders_with_dangling_products_are_viewable() {
        let service = service();
        assert!(service.get_order("order-998").await.is_ok());
        assert!(service.get_order("order-997").await.is_ok());
    }

    #[tokio::test]
    async fn test_maintenance_precedes_every_check() {
        let service = service();
        service.health().set(ServiceHealth::Unavailable);

        for id in ["order-001", "order-404", "order-999"] {
            let status = service.get_order(id).await.unwrap_err();
            assert_eq!(status.code(), Code::Unavailable);
            assert!(status.has_reason(&OrderErrorReason::Maintenance));
            assert_eq!(status.message(), "order service is under maintenance");
        }
    }

    #[tokio::test]
    async fn test_list_and_create_ignore_health() {
        let service = service();
        service.health().set(ServiceHealth::Unavailable);

        let page = service
            .list_orders_by_user("user-002", PageRequest::new(10, 0))
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert!(service.create_order("user-002", vec![]).await.is_ok());
    }

    #[tokio::test]
    async fn test_first_created_order_follows_seed() {
        let service = service();
        let items = vec![OrderItem::new("prod-004", 1, Money::from_cents(8999))];

        let order = service.create_order("user-003", items).await.unwrap();

        assert_eq!(order.id.as_str(), "order-008");
        assert_eq!(order.total_amount.cents(), 8999);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(service.is_consistent().await);
    }

    #[tokio::test]
    async fn test_list_for_user_without_orders() {
        let page = service()
            .list_orders_by_user("user-999", PageRequest::new(10, 0))
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_list_seeded_orders_in_insertion_order() {
        let page = service()
            .list_orders_by_user("user-001", PageRequest::new(3, 1))
            .await
            .unwrap();

        let ids: Vec<&str> = page.items.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["order-002", "order-999", "order-998"]);
        assert_eq!(page.total, 5);
    }
}
