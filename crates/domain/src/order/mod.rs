//! Orders and the order service.

mod model;
pub mod seed;
mod service;
mod state;
mod store;

pub use model::{Order, OrderId, OrderItem};
pub use service::{InMemoryOrderService, OrderService};
pub use state::OrderStatus;
pub use store::OrderStore;

use common::ReasonCode;

/// Subject of every violation raised by `GetOrder`.
pub const GET_ORDER_SUBJECT: &str = "OrderService/GetOrder";

/// Business rules `GetOrder` can reject a request for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFailureCode {
    OrderNotFound,
    OrderCancelled,
    OrderNoItems,
}

impl ReasonCode for OrderFailureCode {
    fn as_str(&self) -> &'static str {
        match self {
            OrderFailureCode::OrderNotFound => "ORDER_FAILURE_CODE_ORDER_NOT_FOUND",
            OrderFailureCode::OrderCancelled => "ORDER_FAILURE_CODE_ORDER_CANCELLED",
            OrderFailureCode::OrderNoItems => "ORDER_FAILURE_CODE_ORDER_NO_ITEMS",
        }
    }
}

/// Reasons the order service can be unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderErrorReason {
    Maintenance,
}

impl ReasonCode for OrderErrorReason {
    fn as_str(&self) -> &'static str {
        match self {
            OrderErrorReason::Maintenance => "ORDER_ERROR_REASON_MAINTENANCE",
        }
    }
}
