use std::borrow::Borrow;

use common::Timestamp;
use serde::{Deserialize, Serialize};

use super::OrderStatus;
use crate::{Money, ProductId, UserId};

/// Order identifier, e.g. `order-001`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Formats a sequence number as `order-NNN`, zero-padded to three digits.
    pub fn from_sequence(seq: u64) -> Self {
        Self(format!("order-{seq:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for OrderId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Opaque reference into the product service; not checked on creation.
    pub product_id: ProductId,

    pub quantity: u32,

    /// Unit price at the time of ordering.
    pub price: Money,
}

impl OrderItem {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32, price: Money) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            price,
        }
    }

    /// Returns `price * quantity`.
    pub fn line_total(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_amount: Money,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Order {
    /// Sums the line totals of `items`.
    pub fn total_of(items: &[OrderItem]) -> Money {
        items.iter().map(OrderItem::line_total).sum()
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == OrderStatus::Cancelled
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_from_sequence() {
        assert_eq!(OrderId::from_sequence(8).as_str(), "order-008");
        assert_eq!(OrderId::from_sequence(42).as_str(), "order-042");
        assert_eq!(OrderId::from_sequence(1234).as_str(), "order-1234");
    }

    #[test]
    fn test_total_of_items() {
        let items = vec![
            OrderItem::new("prod-001", 1, Money::from_cents(129999)),
            OrderItem::new("prod-002", 2, Money::from_cents(2999)),
        ];
        assert_eq!(Order::total_of(&items), Money::from_cents(135997));
        assert!(Order::total_of(&[]).is_zero());
    }

    #[test]
    fn test_order_item_serialization() {
        let item = OrderItem::new("prod-002", 3, Money::from_cents(2999));
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["product_id"], "prod-002");
        assert_eq!(json["quantity"], 3);
        assert_eq!(json["price"], 29.99);
    }
}
