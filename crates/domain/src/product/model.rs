use common::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{Money, ProductId};

/// A catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: String,
    pub stock: u32,
    pub created_at: Timestamp,
}

impl Product {
    /// Returns true if the product can be handed out by `GetProduct`.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
