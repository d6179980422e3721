//! Orders present at process start.
//!
//! Besides regular orders the seed carries deliberate edge cases:
//! `order-999` is cancelled and empty, `order-998` references a product that
//! does not exist and `order-997` references one that is out of stock.

use chrono::Duration;
use common::Timestamp;

use super::{Order, OrderId, OrderItem, OrderStatus};
use crate::{Money, UserId};

/// Sequence number the first order created after seeding receives.
pub const NEXT_SEQUENCE: u64 = 8;

fn order(
    id: &str,
    user_id: &str,
    status: OrderStatus,
    items: Vec<OrderItem>,
    now: Timestamp,
    created_hours_ago: i64,
    updated_hours_ago: i64,
) -> Order {
    Order {
        id: OrderId::new(id),
        user_id: UserId::new(user_id),
        total_amount: Order::total_of(&items),
        items,
        status,
        created_at: now - Duration::hours(created_hours_ago),
        updated_at: now - Duration::hours(updated_hours_ago),
    }
}

fn item(product_id: &str, quantity: u32, cents: i64) -> OrderItem {
    OrderItem::new(product_id, quantity, Money::from_cents(cents))
}

/// Returns the seeded orders in insertion order.
pub fn orders(now: Timestamp) -> Vec<Order> {
    vec![
        order(
            "order-001",
            "user-001",
            OrderStatus::Delivered,
            vec![item("prod-001", 1, 129999), item("prod-002", 2, 2999)],
            now,
            72,
            24,
        ),
        order(
            "order-002",
            "user-001",
            OrderStatus::Processing,
            vec![item("prod-003", 1, 4999), item("prod-004", 1, 8999)],
            now,
            24,
            12,
        ),
        order(
            "order-003",
            "user-002",
            OrderStatus::Shipped,
            vec![item("prod-005", 2, 39999)],
            now,
            48,
            6,
        ),
        order(
            "order-004",
            "user-002",
            OrderStatus::Pending,
            vec![item("prod-002", 3, 2999)],
            now,
            2,
            2,
        ),
        order(
            "order-005",
            "user-003",
            OrderStatus::Delivered,
            vec![item("prod-001", 1, 129999), item("prod-005", 1, 39999)],
            now,
            120,
            96,
        ),
        order(
            "order-999",
            "user-001",
            OrderStatus::Cancelled,
            vec![],
            now,
            48,
            48,
        ),
        order(
            "order-998",
            "user-001",
            OrderStatus::Pending,
            vec![item("prod-notfound", 1, 9999)],
            now,
            1,
            1,
        ),
        order(
            "order-997",
            "user-001",
            OrderStatus::Pending,
            vec![item("prod-999", 1, 9999)],
            now,
            1,
            1,
        ),
    ]
}
