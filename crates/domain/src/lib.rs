//! Domain layer: the user, product and order services.
//!
//! Each service owns its entities for the process lifetime and answers
//! through an `#[async_trait]` service trait. Every rejection is a
//! [`common::Status`] built by [`common::failed_precondition`] or
//! [`common::unavailable`], so callers branch on codes instead of text.
//!
//! - [`user`]: existence and account-suspension checks
//! - [`product`]: existence and stock checks, filtered listing, bulk lookup
//! - [`order`]: existence, cancellation and empty-items checks, creation with
//!   computed totals, per-user listing

pub mod order;
pub mod product;
mod telemetry;
pub mod user;
mod value_objects;

pub use order::{
    InMemoryOrderService, Order, OrderErrorReason, OrderFailureCode, OrderId, OrderItem,
    OrderService, OrderStatus, OrderStore,
};
pub use product::{
    InMemoryProductService, Product, ProductErrorReason, ProductFailureCode, ProductService,
};
pub use user::{
    AccountStatus, InMemoryUserService, User, UserErrorReason, UserFailureCode, UserId,
    UserService,
};
pub use value_objects::{Money, ProductId};
