//! Product records and the product service.

mod model;
pub mod seed;
mod service;

pub use model::Product;
pub use service::{InMemoryProductService, ProductService};

use common::ReasonCode;

/// Subject of every violation raised by `GetProduct`.
pub const GET_PRODUCT_SUBJECT: &str = "ProductService/GetProduct";

/// Business rules `GetProduct` can reject a request for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFailureCode {
    ProductNotFound,
    ProductOutOfStock,
}

impl ReasonCode for ProductFailureCode {
    fn as_str(&self) -> &'static str {
        match self {
            ProductFailureCode::ProductNotFound => "PRODUCT_FAILURE_CODE_PRODUCT_NOT_FOUND",
            ProductFailureCode::ProductOutOfStock => "PRODUCT_FAILURE_CODE_PRODUCT_OUT_OF_STOCK",
        }
    }
}

/// Reasons the product service can be unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductErrorReason {
    Maintenance,
}

impl ReasonCode for ProductErrorReason {
    fn as_str(&self) -> &'static str {
        match self {
            ProductErrorReason::Maintenance => "PRODUCT_ERROR_REASON_MAINTENANCE",
        }
    }
}
