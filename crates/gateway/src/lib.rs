//! Gateway client provisioning.
//!
//! The aggregation layer reaches the domain services only through a
//! [`ClientFactory`]: one accessor per service, each taking the per-call
//! [`ClientConfig`]. [`StaticClientFactory`] hands out handles built once at
//! startup, so every call for a service returns the same client. Tests swap in
//! fakes by registering other implementations of the service traits.

pub mod config;
pub mod error;
pub mod factory;

pub use config::ClientConfig;
pub use error::GatewayError;
pub use factory::{ClientFactory, StaticClientFactory};
