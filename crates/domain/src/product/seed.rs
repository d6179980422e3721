//! Catalogue present at process start.

use common::Timestamp;

use super::Product;
use crate::{Money, ProductId};

fn product(
    id: &str,
    name: &str,
    description: &str,
    cents: i64,
    category: &str,
    stock: u32,
    created_at: Timestamp,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_cents(cents),
        category: category.to_string(),
        stock,
        created_at,
    }
}

/// Returns the seeded catalogue, `prod-999` having no stock.
pub fn products(now: Timestamp) -> Vec<Product> {
    vec![
        product(
            "prod-001",
            "Laptop Pro 15",
            "High-performance laptop with 15-inch display",
            129999,
            "Electronics",
            50,
            now,
        ),
        product(
            "prod-002",
            "Wireless Mouse",
            "Ergonomic wireless mouse with long battery life",
            2999,
            "Accessories",
            200,
            now,
        ),
        product(
            "prod-003",
            "USB-C Hub",
            "7-in-1 USB-C hub with HDMI and card reader",
            4999,
            "Accessories",
            150,
            now,
        ),
        product(
            "prod-004",
            "Mechanical Keyboard",
            "RGB mechanical keyboard with blue switches",
            8999,
            "Accessories",
            75,
            now,
        ),
        product(
            "prod-005",
            "4K Monitor",
            "27-inch 4K IPS monitor with HDR support",
            39999,
            "Electronics",
            30,
            now,
        ),
        product(
            "prod-999",
            "Out of Stock Item",
            "This product is out of stock",
            9999,
            "Test",
            0,
            now,
        ),
    ]
}
